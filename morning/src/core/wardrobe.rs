//! Getting dressed in a valid order.

use std::fmt;

use thiserror::Error;

use crate::core::input::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Garment {
    Shirt,
    Pants,
    Underwear,
    Socks,
    Shoes,
}

impl Garment {
    /// Display order.
    pub const ALL: [Garment; 5] = [
        Garment::Shirt,
        Garment::Pants,
        Garment::Underwear,
        Garment::Socks,
        Garment::Shoes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Garment::Shirt => "shirt",
            Garment::Pants => "pants",
            Garment::Underwear => "underwear",
            Garment::Socks => "socks",
            Garment::Shoes => "shoes",
        }
    }

    /// Parse a typed garment name (whitespace and case are ignored).
    pub fn parse(text: &str) -> Option<Self> {
        let wanted = normalize(text);
        Self::ALL.into_iter().find(|garment| garment.name() == wanted)
    }

    fn index(self) -> usize {
        match self {
            Garment::Shirt => 0,
            Garment::Pants => 1,
            Garment::Underwear => 2,
            Garment::Socks => 3,
            Garment::Shoes => 4,
        }
    }
}

impl fmt::Display for Garment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a garment could not be put on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WearError {
    #[error("You can't put pants on before underwear")]
    PantsBeforeUnderwear,
    #[error("You can't put shoes on before socks")]
    ShoesBeforeSocks,
    #[error("You can't put shoes on before pants")]
    ShoesBeforePants,
    #[error("You are already wearing that")]
    AlreadyWearing,
}

/// Worn flag per garment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WearingState {
    worn: [bool; 5],
}

impl WearingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_wearing(&self, garment: Garment) -> bool {
        self.worn[garment.index()]
    }

    /// Put on `garment`, leaving state untouched when the order is wrong.
    ///
    /// Checks run in a fixed order, so putting shoes on with neither socks nor
    /// pants reports the missing socks.
    pub fn wear(&mut self, garment: Garment) -> Result<(), WearError> {
        match garment {
            Garment::Pants if !self.is_wearing(Garment::Underwear) => {
                return Err(WearError::PantsBeforeUnderwear);
            }
            Garment::Shoes if !self.is_wearing(Garment::Socks) => {
                return Err(WearError::ShoesBeforeSocks);
            }
            Garment::Shoes if !self.is_wearing(Garment::Pants) => {
                return Err(WearError::ShoesBeforePants);
            }
            _ => {}
        }
        if self.is_wearing(garment) {
            return Err(WearError::AlreadyWearing);
        }
        self.worn[garment.index()] = true;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.worn.iter().all(|worn| *worn)
    }

    /// Garments with their worn flag, in display order.
    pub fn items(&self) -> impl Iterator<Item = (Garment, bool)> + '_ {
        Garment::ALL
            .into_iter()
            .map(|garment| (garment, self.is_wearing(garment)))
    }
}

use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// HP-model encoding of human ubiquitin, the chain folded by the simulation.
pub const UBIQUITIN_HP: &str =
    "PHPHHHHHPHPHPHHPPPPPHPPPPHHHPPPPPHPPPHHPHPHHHHPPPPHHHHPPHPHPHHHHHHHHHPPHHPP";

static CLASS_BY_SYMBOL: Map<char, ResidueClass> = phf_map! {
    'H' => ResidueClass::Hydrophobic,
    'h' => ResidueClass::Hydrophobic,
    'P' => ResidueClass::Polar,
    'p' => ResidueClass::Polar,
};

/// Hydrophobicity class of a residue in the HP model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueClass {
    Hydrophobic,
    Polar,
}

impl ResidueClass {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        CLASS_BY_SYMBOL.get(&symbol).copied()
    }

    pub fn symbol(self) -> char {
        match self {
            ResidueClass::Hydrophobic => 'H',
            ResidueClass::Polar => 'P',
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid HP symbol '{symbol}' at position {position} (expected 'H' or 'P')")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("HP sequence is empty")]
    Empty,
}

/// Fixed reference sequence labelling each residue of the chain as `H` or `P`.
///
/// Cloning is cheap; the classes are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydrophobicitySequence {
    classes: Arc<[ResidueClass]>,
}

impl HydrophobicitySequence {
    pub fn new(classes: Vec<ResidueClass>) -> Result<Self, SequenceError> {
        if classes.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self {
            classes: classes.into(),
        })
    }

    pub fn ubiquitin() -> Self {
        Self {
            classes: UBIQUITIN_HP
                .chars()
                .filter_map(ResidueClass::from_symbol)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ResidueClass> {
        self.classes.get(index).copied()
    }

    pub fn last(&self) -> Option<ResidueClass> {
        self.classes.last().copied()
    }

    pub fn classes(&self) -> &[ResidueClass] {
        &self.classes
    }
}

impl Default for HydrophobicitySequence {
    fn default() -> Self {
        Self::ubiquitin()
    }
}

impl FromStr for HydrophobicitySequence {
    type Err = SequenceError;

    /// Parses a string of `H`/`P` symbols; whitespace is ignored, case is not significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let classes = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, symbol)| {
                ResidueClass::from_symbol(symbol)
                    .ok_or(SequenceError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(classes)
    }
}

impl fmt::Display for HydrophobicitySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in self.classes() {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

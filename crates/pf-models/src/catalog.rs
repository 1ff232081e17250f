//! Catalog of the built-in attractor families.

use crate::error::ModelError;
use crate::traits::DynamicalSystem;
use crate::{Aizawa, Brusselator, Lorenz, Lorenz96, Repressilator, Thomas};

/// The attractor families shipped with phaseflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemKind {
    Lorenz,
    Lorenz96,
    Aizawa,
    Brusselator,
    Thomas,
    Repressilator,
}

impl SystemKind {
    pub const ALL: [SystemKind; 6] = [
        SystemKind::Lorenz,
        SystemKind::Lorenz96,
        SystemKind::Aizawa,
        SystemKind::Brusselator,
        SystemKind::Thomas,
        SystemKind::Repressilator,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SystemKind::Lorenz => "lorenz",
            SystemKind::Lorenz96 => "lorenz96",
            SystemKind::Aizawa => "aizawa",
            SystemKind::Brusselator => "brusselator",
            SystemKind::Thomas => "thomas",
            SystemKind::Repressilator => "repressilator",
        }
    }

    /// State dimension of the default configuration.
    pub fn dim(&self) -> usize {
        match self {
            SystemKind::Brusselator => 2,
            SystemKind::Lorenz96 => 5,
            _ => 3,
        }
    }

    /// Instantiate the family with its reference parameters.
    pub fn build(&self) -> Box<dyn DynamicalSystem> {
        match self {
            SystemKind::Lorenz => Box::new(Lorenz::default()),
            SystemKind::Lorenz96 => Box::new(Lorenz96::default()),
            SystemKind::Aizawa => Box::new(Aizawa::default()),
            SystemKind::Brusselator => Box::new(Brusselator::default()),
            SystemKind::Thomas => Box::new(Thomas::default()),
            SystemKind::Repressilator => Box::new(Repressilator::default()),
        }
    }
}

impl std::fmt::Display for SystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for SystemKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lorenz" => Ok(SystemKind::Lorenz),
            "lorenz96" | "lorenz-96" | "l96" => Ok(SystemKind::Lorenz96),
            "aizawa" => Ok(SystemKind::Aizawa),
            "brusselator" => Ok(SystemKind::Brusselator),
            "thomas" => Ok(SystemKind::Thomas),
            "repressilator" => Ok(SystemKind::Repressilator),
            other => Err(ModelError::UnknownSystem {
                name: other.to_string(),
            }),
        }
    }
}

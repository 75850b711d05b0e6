// =============================================================================
// CONFIG — Paramètres de la démonstration
// =============================================================================
//
// La dérivation elle-même n'a aucun paramètre. Seule la démonstration
// (main.rs) en a : la longueur de la chaîne d'approximations, les entrées
// à afficher, et la nature de la graine.
//
// Format : JSON, tous les champs optionnels.
//
//   {
//     "chain_length": 10,
//     "max_input": 10,
//     "fibonacci_input": 10,
//     "seed": "random"          // ou "zero", "identity", {"seeded": 42}
//   }
//
// =============================================================================

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::approx::SeedKind;
use crate::core::factory::FACTORIAL_MAX_INPUT;

/// Au-delà, Fibonacci par récursion naïve devient trop lent pour une démo.
pub const FIBONACCI_MAX_INPUT: u64 = 30;

/// Erreurs de chargement de la configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Les paramètres de la démonstration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DerivationConfig {
    /// Profondeur de la chaîne `factorialUpTo0 ..= factorialUpTo{chain_length}`
    pub chain_length: usize,
    /// Plus grande entrée affichée pour la factorielle
    pub max_input: u64,
    /// Entrée affichée pour Fibonacci
    pub fibonacci_input: u64,
    /// Graine des approximations
    pub seed: SeedKind,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        DerivationConfig {
            chain_length: 10,
            max_input: 10,
            fibonacci_input: 10,
            seed: SeedKind::Random,
        }
    }
}

impl DerivationConfig {
    /// Parse et valide une configuration JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: DerivationConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Lit et valide un fichier de configuration.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Comme `from_file`, mais un fichier absent donne la configuration par défaut.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Vérifie que les entrées restent dans le domaine exact de `u64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limit = FACTORIAL_MAX_INPUT;
        if self.max_input > limit {
            return Err(ConfigError::Invalid(format!(
                "max_input = {} : la factorielle déborde au-delà de {}",
                self.max_input, limit
            )));
        }
        if self.chain_length as u64 > limit {
            return Err(ConfigError::Invalid(format!(
                "chain_length = {} : la factorielle déborde au-delà de {}",
                self.chain_length, limit
            )));
        }
        if self.fibonacci_input > FIBONACCI_MAX_INPUT {
            return Err(ConfigError::Invalid(format!(
                "fibonacci_input = {} : maximum {}",
                self.fibonacci_input, FIBONACCI_MAX_INPUT
            )));
        }
        Ok(())
    }
}

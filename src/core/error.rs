// =============================================================================
// ERROR — Les erreurs de la dérivation
// =============================================================================
//
// La dérivation elle-même ne peut pas échouer : toutes les fonctions sont
// pures et totales sur les entiers naturels. Les seules erreurs sont :
//   - un dépassement de capacité quand on demande une factorielle exacte
//   - une demande d'approximation au-delà de la chaîne construite
//
// L'échec "débordement de pile" du point fixe non différé n'est PAS une
// erreur récupérable : c'est un abandon du processus (voir fix::fix_eager).
//
// =============================================================================

use thiserror::Error;

/// Erreurs des opérations de la dérivation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DerivationError {
    #[error("Factorial overflow: {input}! does not fit in u64")]
    Overflow { input: u64 },

    #[error("Approximation level {requested} not in chain (deepest level is {deepest})")]
    LevelOutOfRange { requested: usize, deepest: usize },
}

// =============================================================================
// LAW — Vérification de la loi du point fixe
// =============================================================================
//
// Ce module vérifie, sur des entrées concrètes, que les constructions
// respectent ce qu'elles prétendent :
//   - la loi du point fixe : Y(F)(n) = F(Y(F))(n)
//   - l'accord entre deux fonctions (deux formulations de Y, ou Y face à la
//     récursion directe)
//
// Les fonctions étant opaques, on ne peut pas prouver l'égalité : on
// l'observe point par point. Toutes les violations sont collectées, pas
// seulement la première.
//
// =============================================================================

use std::fmt::Debug;

use thiserror::Error;

use super::func::{Factory, Fixer, Func};

/// Une égalité observée comme fausse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Law violation at {input}: {lhs} != {rhs}")]
pub struct LawViolation {
    /// L'entrée, rendue via `Debug`
    pub input: String,
    /// Le côté gauche de l'égalité, rendu via `Debug`
    pub lhs: String,
    /// Le côté droit
    pub rhs: String,
}

/// Vérifie que `lhs` et `rhs` coïncident sur chaque entrée.
pub fn check_agreement<'a, A, R>(
    lhs: &Func<'a, A, R>,
    rhs: &Func<'a, A, R>,
    inputs: impl IntoIterator<Item = A>,
) -> Result<(), Vec<LawViolation>>
where
    A: Clone + Debug,
    R: PartialEq + Debug,
{
    let mut violations = Vec::new();

    for input in inputs {
        let left = lhs(input.clone());
        let right = rhs(input.clone());
        if left != right {
            violations.push(LawViolation {
                input: format!("{:?}", input),
                lhs: format!("{:?}", left),
                rhs: format!("{:?}", right),
            });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Vérifie la loi du point fixe `Y(F)(n) = F(Y(F))(n)` sur chaque entrée.
pub fn check_fixed_point_law<'a, A, R>(
    fixer: &Fixer<'a, A, R>,
    factory: &Factory<'a, A, R>,
    inputs: impl IntoIterator<Item = A>,
) -> Result<(), Vec<LawViolation>>
where
    A: Clone + Debug,
    R: PartialEq + Debug,
{
    let fixed = fixer(factory.clone());
    let unfolded = factory(fixed.clone());
    check_agreement(&fixed, &unfolded, inputs)
}

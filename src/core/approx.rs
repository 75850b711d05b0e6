// =============================================================================
// APPROX — Les approximations bornées : chaîner la fabrique à la main
// =============================================================================
//
// Avant de trouver le point fixe, on peut "tricher" : appliquer la fabrique
// à elle-même un nombre FINI de fois, à partir d'une graine quelconque.
//
//   factorialUpTo0  = F(graine)          juste pour n = 0
//   factorialUpTo1  = F(factorialUpTo0)  juste pour n ∈ {0, 1}
//   factorialUpTo2  = F(factorialUpTo1)  juste pour n ∈ {0, 1, 2}
//   ...
//
// Chaque application ajoute exactement UN entier à la zone de validité.
// Aucune auto-référence : le niveau k est construit à partir du niveau
// k - 1 déjà matérialisé.
//
// LA GRAINE :
//   Elle représente "un calcul faux". Au-delà de sa zone de validité, une
//   approximation finit par appeler la graine, et le résultat doit être
//   VISIBLEMENT faux (mais bien défini, sans panique). Une graine aléatoire
//   rend l'échec évident à l'œil ; une graine déterministe (zéro, identité,
//   pseudo-aléatoire fixé) rend les tests reproductibles.
//
// ANALOGIE :
//   C'est un déroulage de boucle : on déroule k + 1 fois le corps récursif.
//   Le combinateur Y (voir fix.rs) est le déroulage INFINI, à la demande.
//
// =============================================================================

use std::fmt;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::DerivationError;
use super::direct;
use super::factory::{factorial_factory, FACTORIAL_MAX_INPUT};
use super::func::{factory, Factory, Func};

/// La nature de la graine des approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedKind {
    /// Un `u64` tiré au hasard à chaque appel (non déterministe)
    #[default]
    Random,
    /// Pseudo-aléatoire, mais fonction pure de (graine, n)
    Seeded(u64),
    /// Toujours 0 : aucune factorielle ne vaut 0
    Zero,
    /// Rend son argument
    Identity,
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedKind::Random => write!(f, "random"),
            SeedKind::Seeded(s) => write!(f, "seeded({})", s),
            SeedKind::Zero => write!(f, "zero"),
            SeedKind::Identity => write!(f, "identity"),
        }
    }
}

/// Construit la fonction graine correspondant à `kind`.
///
/// Chaque appel à la graine signifie qu'une approximation a été utilisée
/// hors de sa zone de validité : on le trace au niveau `debug`.
pub fn seed<'a>(kind: SeedKind) -> Func<'a, u64, u64> {
    Rc::new(move |n: u64| {
        let value = match kind {
            SeedKind::Random => rand::random::<u64>(),
            SeedKind::Seeded(s) => StdRng::seed_from_u64(s.wrapping_add(n)).gen::<u64>(),
            SeedKind::Zero => 0,
            SeedKind::Identity => n,
        };
        debug!(n, value, seed = %kind, "seed reached: approximation exhausted");
        value
    })
}

/// Applique `factory` `k + 1` fois à `seed` : le résultat est juste pour `0..=k`.
pub fn bounded<'a, A: 'a, R: 'a>(
    factory: &Factory<'a, A, R>,
    seed: Func<'a, A, R>,
    k: usize,
) -> Func<'a, A, R> {
    (0..=k).fold(seed, |f, _| factory(f))
}

/// `factorialUpTo_k` : la factorielle juste pour `0 <= n <= k`.
pub fn factorial_up_to<'a>(k: usize, seed: Func<'a, u64, u64>) -> Func<'a, u64, u64> {
    bounded(&factory(factorial_factory), seed, k)
}

/// La chaîne matérialisée des approximations `0..=deepest`.
///
/// Le niveau k est `F^(k+1)(graine)`. Tous les niveaux partagent leurs
/// préfixes : le niveau k référence le niveau k - 1, pas une copie.
pub struct ApproximationChain<'a, A, R> {
    levels: Vec<Func<'a, A, R>>,
}

impl<'a, A: 'a, R: 'a> ApproximationChain<'a, A, R> {
    /// Construit les niveaux `0..=depth` de `factory` à partir de `seed`.
    pub fn build(factory: &Factory<'a, A, R>, seed: Func<'a, A, R>, depth: usize) -> Self {
        let levels: Vec<Func<'a, A, R>> =
            std::iter::successors(Some(factory(seed)), |prev| Some(factory(prev.clone())))
                .take(depth + 1)
                .collect();
        debug!(depth, levels = levels.len(), "approximation chain built");
        ApproximationChain { levels }
    }

    /// L'approximation de niveau `k` (juste pour `0..=k`).
    pub fn level(&self, k: usize) -> Result<&Func<'a, A, R>, DerivationError> {
        self.levels.get(k).ok_or(DerivationError::LevelOutOfRange {
            requested: k,
            deepest: self.deepest(),
        })
    }

    /// Le niveau le plus profond disponible.
    pub fn deepest(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Nombre de niveaux (`deepest() + 1`).
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Vrai seulement pour une chaîne sans niveau (jamais produite par `build`).
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Parcourt les niveaux avec leur profondeur.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Func<'a, A, R>)> {
        self.levels.iter().enumerate()
    }
}

impl<'a> ApproximationChain<'a, u64, u64> {
    /// La chaîne `factorialUpTo0 ..= factorialUpTo{depth}`.
    pub fn factorial(depth: usize, seed: Func<'a, u64, u64>) -> Self {
        Self::build(&factory(factorial_factory), seed, depth)
    }

    /// La zone de validité mesurée de chaque niveau, face à la factorielle exacte.
    ///
    /// Chaque niveau est sondé jusqu'à `deepest() + 1`, sans dépasser
    /// `FACTORIAL_MAX_INPUT` : au-delà, la référence elle-même déborde.
    pub fn factorial_bounds(&self) -> Vec<Option<u64>> {
        let probe_limit = (self.deepest() as u64 + 1).min(FACTORIAL_MAX_INPUT);
        (0..self.len())
            .filter_map(|k| self.measured_bound(k, direct::factorial, probe_limit).ok())
            .collect()
    }
}

impl<'a, R: PartialEq + 'a> ApproximationChain<'a, u64, R> {
    /// Mesure EMPIRIQUEMENT la zone de validité du niveau `k`.
    ///
    /// Rend le plus grand `n <= probe_limit` tel que le niveau `k` coïncide
    /// avec `reference` sur tout `0..=n`, ou `None` s'il diffère dès 0.
    /// Pour une graine visiblement fausse, on attend `Some(k)`.
    pub fn measured_bound(
        &self,
        k: usize,
        reference: impl Fn(u64) -> R,
        probe_limit: u64,
    ) -> Result<Option<u64>, DerivationError> {
        let approx = self.level(k)?;
        let mut bound = None;
        for n in 0..=probe_limit {
            if approx(n) != reference(n) {
                break;
            }
            bound = Some(n);
        }
        Ok(bound)
    }
}

// =============================================================================
// FACTORY — Retirer le nom : l'appel récursif devient un paramètre
// =============================================================================
//
// Au lieu d'écrire une fonction qui s'appelle elle-même, on écrit une
// FABRIQUE qui reçoit "l'appel récursif" `f` en argument et rend une
// fonction complète pour UNE étape :
//
//   factorial_factory(f) = n ↦ n == 0 ? 1 : n * f(n - 1)
//
// La fabrique n'est pas récursive. Elle est exactement aussi correcte que
// le `f` qu'on lui donne, plus un cran : si `f` est juste jusqu'à k - 1,
// alors `factorial_factory(f)` est juste jusqu'à k.
//
// ARITHMÉTIQUE :
//   Les fabriques sur `u64` calculent modulo 2^64 (wrapping). Une
//   approximation appelée hors de sa zone de validité multiplie par une
//   valeur arbitraire de la graine : le résultat doit être faux mais bien
//   défini, jamais une panique. Pour un résultat exact ou une erreur, il y a
//   `checked_factorial_factory`.
//
// ARITÉ :
//   `gcd_factory` prend un couple (arité fixe), `sum_factory` une liste
//   d'arguments de longueur quelconque. Le combinateur Y les traite comme
//   n'importe quelle autre fabrique : il transmet l'argument tel quel.
//
// =============================================================================

use std::rc::Rc;

use super::error::DerivationError;
use super::func::Func;

/// Plus grand `n` dont la factorielle tient dans un `u64`.
pub const FACTORIAL_MAX_INPUT: u64 = 20;

/// La fabrique de la factorielle : `g(0) = 1`, `g(n) = n * f(n - 1)`.
pub fn factorial_factory<'a>(f: Func<'a, u64, u64>) -> Func<'a, u64, u64> {
    Rc::new(move |n: u64| {
        if n == 0 {
            1
        } else {
            n.wrapping_mul(f(n - 1))
        }
    })
}

/// La fabrique de Fibonacci : `g(0) = g(1) = 1`, `g(n) = f(n - 2) + f(n - 1)`.
pub fn fibonacci_factory<'a>(f: Func<'a, u64, u64>) -> Func<'a, u64, u64> {
    Rc::new(move |n: u64| {
        if n < 2 {
            1
        } else {
            f(n - 2).wrapping_add(f(n - 1))
        }
    })
}

/// La factorielle exacte : même récurrence, mais le débordement est une erreur.
///
/// L'erreur d'un appel récursif remonte telle quelle (`?`), de sorte que
/// l'entrée rapportée est la PREMIÈRE qui déborde (21).
pub fn checked_factorial_factory<'a>(
    f: Func<'a, u64, Result<u64, DerivationError>>,
) -> Func<'a, u64, Result<u64, DerivationError>> {
    Rc::new(move |n: u64| {
        if n == 0 {
            return Ok(1);
        }
        let previous = f(n - 1)?;
        previous
            .checked_mul(n)
            .ok_or(DerivationError::Overflow { input: n })
    })
}

/// Le PGCD d'Euclide, sur un couple d'arguments.
pub fn gcd_factory<'a>(f: Func<'a, (u64, u64), u64>) -> Func<'a, (u64, u64), u64> {
    Rc::new(move |(a, b): (u64, u64)| if b == 0 { a } else { f((b, a % b)) })
}

/// La somme d'une liste d'arguments de longueur quelconque.
///
/// Chaque étape retire le dernier argument et transmet le reste de la liste
/// à l'appel récursif.
pub fn sum_factory<'a>(f: Func<'a, Vec<u64>, u64>) -> Func<'a, Vec<u64>, u64> {
    Rc::new(move |mut args: Vec<u64>| match args.pop() {
        None => 0,
        Some(last) => last.wrapping_add(f(args)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::func::func;

    #[test]
    fn test_factorial_factory_one_step() {
        // La fabrique ne fait qu'UNE multiplication puis délègue à f
        let g = factorial_factory(func(|n: u64| n + 100));
        assert_eq!(g(0), 1);
        assert_eq!(g(3), 3 * 102);
    }

    #[test]
    fn test_fibonacci_factory_one_step() {
        let g = fibonacci_factory(func(|n: u64| n * 10));
        assert_eq!(g(0), 1);
        assert_eq!(g(1), 1);
        // f(2) + f(3) = 20 + 30
        assert_eq!(g(4), 50);
    }

    #[test]
    fn test_factorial_factory_never_panics_on_garbage() {
        let g = factorial_factory(func(|_n: u64| u64::MAX));
        assert_eq!(g(2), 2u64.wrapping_mul(u64::MAX));
    }

    #[test]
    fn test_checked_factorial_factory() {
        let ok = checked_factorial_factory(func(|_n: u64| Ok(6)));
        assert_eq!(ok(4), Ok(24));

        let too_big = checked_factorial_factory(func(|_n: u64| Ok(u64::MAX / 2)));
        assert_eq!(too_big(3), Err(DerivationError::Overflow { input: 3 }));

        let failing = checked_factorial_factory(func(|_n: u64| Err(DerivationError::Overflow { input: 21 })));
        assert_eq!(failing(22), Err(DerivationError::Overflow { input: 21 }));
    }

    #[test]
    fn test_gcd_factory_forwards_pair() {
        let g = gcd_factory(func(|(a, b): (u64, u64)| a * 1000 + b));
        assert_eq!(g((7, 0)), 7);
        // une étape : (12, 18) → f((18, 12))
        assert_eq!(g((12, 18)), 18_012);
    }

    #[test]
    fn test_sum_factory_forwards_rest_of_list() {
        let g = sum_factory(func(|rest: Vec<u64>| rest.len() as u64 * 100));
        assert_eq!(g(vec![]), 0);
        assert_eq!(g(vec![1, 2, 3]), 3 + 200);
    }
}

// =============================================================================
// DIRECT — Le point de départ : la récursion nommée
// =============================================================================
//
// C'est la définition "naïve" que tout le reste cherche à reconstruire :
//
//   factorial(x) = x == 0 ? 1 : x * factorial(x - 1)
//
// La fonction s'appelle ELLE-MÊME par son nom. Toute la dérivation consiste
// à retirer ce nom : d'abord en le passant en paramètre (factory), puis en
// fabriquant ce paramètre sans auto-référence (fix::y).
//
// Ces fonctions servent aussi d'ORACLES dans les tests : le résultat de Y
// doit être indiscernable du leur.
//
// =============================================================================

/// La factorielle, par récursion directe.
///
/// Exacte pour `n <= 20` ; au-delà le produit déborde de `u64`.
pub fn factorial(n: u64) -> u64 {
    if n == 0 {
        1
    } else {
        n * factorial(n - 1)
    }
}

/// Fibonacci avec la convention `Fib(0) = Fib(1) = 1`.
pub fn fibonacci(n: u64) -> u64 {
    if n < 2 {
        1
    } else {
        fibonacci(n - 2) + fibonacci(n - 1)
    }
}

/// Le PGCD d'Euclide : récursion sur un couple d'arguments.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_fibonacci_values() {
        let expected = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as u64), *want, "Fib({})", n);
        }
    }

    #[test]
    fn test_gcd_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
    }
}

// =============================================================================
// FIX — Le combinateur de point fixe Y
// =============================================================================
//
// On cherche une valeur Y telle que, pour toute fabrique F :
//
//   Y(F) = F(Y(F))
//
// Y(F) est alors la fonction récursive complète dont F a été extraite, sans
// limite de profondeur (contrairement aux approximations de approx.rs).
//
// ÉTAPE 1 — la définition littérale (fix_eager) :
//   Y(f) = f(Y(f))
//   En évaluation stricte, l'argument Y(f) est calculé AVANT d'appeler f,
//   donc Y(f) appelle Y(f) qui appelle Y(f)... sans jamais atteindre un cas
//   de base. La pile déborde. (En évaluation paresseuse, ce serait correct.)
//
// ÉTAPE 2 — différer (fix_thunked) :
//   Y(f) = n ↦ f(Y(f))(n)
//   On enveloppe le dépliage dans une fonction de l'argument d'appel : le
//   calcul de Y(f) n'a lieu QUE lorsqu'on appelle la fonction, et seulement
//   autant de fois que le cas de base l'exige. Mais Y utilise encore son
//   propre nom.
//
// ÉTAPE 3 — l'auto-application (y, y_closure) :
//   On remplace "Y par son nom" par "une valeur qu'on s'applique à
//   elle-même" :
//
//     X(autre) = f ↦ n ↦ f(autre(autre)(f))(n)
//     Y        = X(X)
//
//   X(X)(f) se déplie en f(X(X)(f)) : c'est exactement la loi du point fixe.
//   Ni X ni Y ne se nomment eux-mêmes.
//
// TYPAGE EN RUST :
//   "autre(autre)" exige un type qui s'accepte lui-même en argument. C'est
//   `SelfApply` : un newtype autour d'une fonction `&SelfApply → Fixer`.
//   La récursion est dans le TYPE (via un pointeur `Rc`), jamais dans une
//   définition de fonction.
//
// ARITÉ :
//   Tous les combinateurs sont génériques sur `A`, l'argument complet de la
//   fonction. Un tuple donne une arité fixe, un `Vec<T>` une arité inconnue
//   statiquement ; chaque couche transmet `A` sans le regarder.
//
// =============================================================================

use std::rc::Rc;

use tracing::trace;

use super::func::{factory, Factory, Fixer, Func};

/// Le point fixe LITTÉRAL, non différé : `Y(f) = f(Y(f))`.
///
/// Ne termine jamais en Rust : l'argument `fix_eager(factory)` est évalué
/// avant tout appel à `factory`, récursivement, jusqu'au débordement de
/// pile (qui avorte le processus). C'est le contre-exemple qui motive le
/// dépliage différé ; la suite de tests le reproduit dans un processus fils.
#[allow(unconditional_recursion)]
pub fn fix_eager<'a, A: 'a, R: 'a>(factory: Factory<'a, A, R>) -> Func<'a, A, R> {
    factory(fix_eager(factory.clone()))
}

/// Le point fixe différé par récursion nommée : `Y(f) = n ↦ f(Y(f))(n)`.
///
/// Correct à profondeur illimitée, mais `fix_thunked` s'appelle encore
/// lui-même par son nom.
pub fn fix_thunked<'a, A: 'a, R: 'a>(factory: Factory<'a, A, R>) -> Func<'a, A, R> {
    Rc::new(move |n: A| {
        trace!("fix_thunked: unfolding one level");
        factory(fix_thunked(factory.clone()))(n)
    })
}

/// Une valeur applicable à elle-même.
///
/// Le générateur X reçoit un `&SelfApply` (en pratique : lui-même) et rend
/// un opérateur de point fixe.
pub struct SelfApply<'a, A, R>(Rc<dyn Fn(&SelfApply<'a, A, R>) -> Fixer<'a, A, R> + 'a>);

impl<'a, A, R> Clone for SelfApply<'a, A, R> {
    fn clone(&self) -> Self {
        SelfApply(Rc::clone(&self.0))
    }
}

impl<'a, A: 'a, R: 'a> SelfApply<'a, A, R> {
    /// Emballe le générateur X.
    pub fn new<X>(generator: X) -> Self
    where
        X: Fn(&SelfApply<'a, A, R>) -> Fixer<'a, A, R> + 'a,
    {
        SelfApply(Rc::new(generator))
    }

    /// `self(other)`.
    pub fn apply(&self, other: &SelfApply<'a, A, R>) -> Fixer<'a, A, R> {
        (self.0)(other)
    }

    /// `self(self)`.
    pub fn apply_to_self(&self) -> Fixer<'a, A, R> {
        self.apply(self)
    }
}

/// Le générateur X, en fonction nommée : `X(autre) = f ↦ n ↦ f(autre(autre)(f))(n)`.
///
/// X ne s'appelle pas lui-même : il appelle `autre`, qu'on lui a passé.
fn generator<'a, A: 'a, R: 'a>(other: &SelfApply<'a, A, R>) -> Fixer<'a, A, R> {
    let other = other.clone();
    Rc::new(move |f: Factory<'a, A, R>| -> Func<'a, A, R> {
        let other = other.clone();
        Rc::new(move |n: A| {
            // Le dépliage autre(autre)(f) n'a lieu qu'ici, à l'appel
            trace!("y: unfolding one level");
            let recurse = other.apply(&other)(f.clone());
            f(recurse)(n)
        })
    })
}

/// Le combinateur Y, formulation "fonction nommée" : `Y = X(X)`.
pub fn y<'a, A: 'a, R: 'a>() -> Fixer<'a, A, R> {
    let x = SelfApply::new(generator::<A, R>);
    x.apply(&x)
}

/// Le combinateur Y, formulation "fermeture littérale" :
/// `(x ↦ x(x))(autre ↦ f ↦ n ↦ f(autre(autre)(f))(n))`.
pub fn y_closure<'a, A: 'a, R: 'a>() -> Fixer<'a, A, R> {
    let self_apply = |x: SelfApply<'a, A, R>| x.apply_to_self();
    self_apply(SelfApply::new(|other: &SelfApply<'a, A, R>| -> Fixer<'a, A, R> {
        let other = other.clone();
        Rc::new(move |f: Factory<'a, A, R>| -> Func<'a, A, R> {
            let other = other.clone();
            Rc::new(move |n: A| {
                trace!("y_closure: unfolding one level");
                f(other.apply_to_self()(f.clone()))(n)
            })
        })
    }))
}

/// Raccourci : `Y(step)` pour une fabrique donnée sous forme de fonction.
///
/// ```
/// use fixrust::core::factory::factorial_factory;
/// use fixrust::core::fix::fix;
///
/// let factorial = fix(factorial_factory);
/// assert_eq!(factorial(5), 120);
/// ```
pub fn fix<'a, A: 'a, R: 'a, F>(step: F) -> Func<'a, A, R>
where
    F: Fn(Func<'a, A, R>) -> Func<'a, A, R> + 'a,
{
    y()(factory(step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::direct;
    use crate::core::factory::{factorial_factory, fibonacci_factory, gcd_factory, sum_factory};
    use crate::core::func::func;

    #[test]
    fn test_y_factorial_scenarios() {
        let fact = y()(factory(factorial_factory));
        assert_eq!(fact(0), 1);
        assert_eq!(fact(5), 120);
        assert_eq!(fact(10), 3_628_800);
    }

    #[test]
    fn test_y_fibonacci_scenario() {
        let fib = y()(factory(fibonacci_factory));
        assert_eq!(fib(10), 89);
    }

    #[test]
    fn test_all_fixers_match_direct_recursion() {
        let thunked: Fixer<u64, u64> = Rc::new(fix_thunked::<u64, u64>);
        let fixers: Vec<(&str, Fixer<u64, u64>)> =
            vec![("y", y()), ("y_closure", y_closure()), ("fix_thunked", thunked)];
        for (name, fixer) in &fixers {
            let fact = fixer(factory(factorial_factory));
            let fib = fixer(factory(fibonacci_factory));
            for n in 0..=10 {
                assert_eq!(fact(n), direct::factorial(n), "{}: {}!", name, n);
                assert_eq!(fib(n), direct::fibonacci(n), "{}: Fib({})", name, n);
            }
        }
    }

    #[test]
    fn test_y_reaches_full_u64_range() {
        // Pas de limite de chaîne : 20 niveaux de dépliage à la demande
        let fact = fix(factorial_factory);
        assert_eq!(fact(20), direct::factorial(20));
    }

    #[test]
    fn test_fixed_point_law_pointwise() {
        let y_fact = y()(factory(factorial_factory));
        let unfolded = factorial_factory(y_fact.clone());
        for n in 0..=12 {
            assert_eq!(y_fact(n), unfolded(n));
        }
    }

    #[test]
    fn test_y_forwards_tuple_arguments() {
        let gcd = y()(factory(gcd_factory));
        assert_eq!(gcd((48, 180)), 12);
        assert_eq!(gcd((17, 5)), direct::gcd(17, 5));
    }

    #[test]
    fn test_y_forwards_argument_list_of_any_length() {
        let sum = y_closure()(factory(sum_factory));
        assert_eq!(sum(vec![]), 0);
        assert_eq!(sum(vec![4]), 4);
        assert_eq!(sum((1..=100).collect()), 5050);
    }

    #[test]
    fn test_y_with_borrowed_context() {
        // La fabrique peut emprunter des données locales : pas besoin de 'static
        let owned = vec![3u64, 5, 7];
        let weights = &owned;
        let weighted = fix(move |f: Func<usize, u64>| -> Func<usize, u64> {
            func(move |i: usize| if i == 0 { 0 } else { weights[i - 1] + f(i - 1) })
        });
        assert_eq!(weighted(3), 15);
    }

    #[test]
    fn test_y_with_fallible_results() {
        use crate::core::error::DerivationError;
        use crate::core::factory::checked_factorial_factory;

        let fact = fix(checked_factorial_factory);
        assert_eq!(fact(20), Ok(direct::factorial(20)));
        assert_eq!(fact(25), Err(DerivationError::Overflow { input: 21 }));
    }

    #[test]
    fn test_self_apply_is_lazy() {
        // Y(F) n'exécute pas F : seule l'application à un argument le fait
        let fixer: Fixer<u64, u64> = y();
        let _deferred = fixer(factory(|_f: Func<u64, u64>| -> Func<u64, u64> {
            panic!("factory must not run before the first call")
        }));
    }
}

// =============================================================================
// FUNC — Le vocabulaire commun : fonctions, fabriques, combinateurs
// =============================================================================
//
// Toute la dérivation manipule trois "formes" de valeurs :
//
//   Func     = une fonction A → R                  (ex : la factorielle)
//   Factory  = une fonction Func → Func            (ex : factorial_factory)
//   Fixer    = une fonction Factory → Func         (ex : le combinateur Y)
//
// Ces valeurs sont partagées (clonées) à chaque étape du dépliage récursif,
// d'où `Rc<dyn Fn ...>` : un pointeur compté vers une fermeture opaque.
// Pas de `Arc` : tout est mono-thread et pur.
//
// MATHÉMATIQUEMENT :
//   Une fabrique F est un endomorphisme de l'espace des fonctions A → R.
//   Un point fixe de F est une fonction g telle que F(g) = g.
//   Y associe à chaque F un tel point fixe.
//
// =============================================================================

use std::rc::Rc;

/// Une fonction partagée `A → R`.
///
/// `A` représente la LISTE COMPLÈTE des arguments : un `u64`, un tuple
/// `(u64, u64)` pour une arité fixe, ou un `Vec<T>` quand l'arité n'est
/// pas connue statiquement.
pub type Func<'a, A, R> = Rc<dyn Fn(A) -> R + 'a>;

/// Une fabrique : reçoit "l'appel récursif" et rend la fonction d'une étape.
pub type Factory<'a, A, R> = Rc<dyn Fn(Func<'a, A, R>) -> Func<'a, A, R> + 'a>;

/// Un opérateur de point fixe : le type de Y.
pub type Fixer<'a, A, R> = Rc<dyn Fn(Factory<'a, A, R>) -> Func<'a, A, R> + 'a>;

/// Emballe une fonction `Func → Func` quelconque en une [`Factory`] partageable.
///
/// Accepte aussi bien une fonction nommée (`factory(factorial_factory)`)
/// qu'une fermeture.
pub fn factory<'a, A, R, F>(step: F) -> Factory<'a, A, R>
where
    F: Fn(Func<'a, A, R>) -> Func<'a, A, R> + 'a,
{
    Rc::new(step)
}

/// Emballe une fonction `A → R` quelconque en une [`Func`].
pub fn func<'a, A, R, F>(f: F) -> Func<'a, A, R>
where
    F: Fn(A) -> R + 'a,
{
    Rc::new(f)
}

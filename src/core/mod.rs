// =============================================================================
// CORE — La dérivation du combinateur Y, étape par étape
// =============================================================================
//
// Ce module regroupe toute la logique pure : des fonctions d'ordre
// supérieur, sans état, sans entrée/sortie.
//
// Architecture (dans l'ordre de la dérivation) :
//   func     → le vocabulaire : Func, Factory, Fixer
//   direct   → la récursion nommée (le point de départ, et l'oracle)
//   factory  → l'appel récursif devient un paramètre
//   approx   → chaîner la fabrique un nombre fini de fois
//   fix      → le point fixe : littéral, différé, puis par auto-application
//   law      → vérifier Y(F) = F(Y(F)) sur des entrées concrètes
//   error    → les erreurs de la dérivation
//
// =============================================================================

pub mod func;
pub mod direct;
pub mod factory;
pub mod approx;
pub mod fix;
pub mod law;
pub mod error;

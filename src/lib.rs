// =============================================================================
// FIXRUST — Le combinateur de point fixe (Y) dérivé pas à pas
// =============================================================================
//
// Fixrust reconstruit la récursion à partir de fonctions qui ne se nomment
// jamais elles-mêmes, en suivant la dérivation classique du combinateur Y
// sur deux exemples : la factorielle et Fibonacci.
//
// Architecture :
//   core/    → La dérivation pure (aucune entrée/sortie)
//   config   → Les paramètres de la démonstration (main.rs)
//
// Concepts fondamentaux :
//   Fabrique   = une fonction qui reçoit "l'appel récursif" et rend une étape
//   Point fixe = une fonction g telle que F(g) = g
//   Y          = la valeur qui associe à toute fabrique F son point fixe
//   Thunk      = le dépliage différé jusqu'à l'appel, qui rend Y sûr en
//                évaluation stricte
//
// =============================================================================

pub mod core;
pub mod config;

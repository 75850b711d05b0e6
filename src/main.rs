// =============================================================================
// FIXRUST — Point d'entrée : la dérivation du combinateur Y, en direct
// =============================================================================
//
// Ce main.rs déroule la dérivation complète :
//   1. La récursion nommée
//   2. La fabrique (l'appel récursif devient un paramètre)
//   3. Les approximations bornées (chaîner la fabrique à la main)
//   4. Le point fixe littéral (et pourquoi il déborde)
//   5. Le point fixe différé
//   6. Y par auto-application, sous deux formulations
//   7. Fibonacci et les autres arités
//
// Configuration optionnelle : ./fixrust.json (voir config.rs).
// Traces : RUST_LOG=fixrust=trace pour voir chaque dépliage.
//
// =============================================================================

use std::path::Path;

use tracing_subscriber::EnvFilter;

use fixrust::config::DerivationConfig;
use fixrust::core::approx::{seed, ApproximationChain};
use fixrust::core::direct;
use fixrust::core::factory::{
    checked_factorial_factory, factorial_factory, fibonacci_factory, gcd_factory, sum_factory,
};
use fixrust::core::fix::{fix, fix_thunked, y, y_closure};
use fixrust::core::func::{factory, func, Fixer};
use fixrust::core::law;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      FIXRUST — Le combinateur de point fixe      ║");
    println!("║      La récursion sans auto-référence            ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    let config = match DerivationConfig::load_or_default(Path::new("fixrust.json")) {
        Ok(config) => config,
        Err(e) => {
            println!("✗ {} (configuration par défaut utilisée)\n", e);
            DerivationConfig::default()
        }
    };
    let inputs = 0..=config.max_input;

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : La récursion nommée
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : Récursion nommée ═══\n");
    println!("  factorial(x) = x == 0 ? 1 : x * factorial(x - 1)\n");

    for n in inputs.clone() {
        println!("  factorial({:>2}) = {}", n, direct::factorial(n));
    }
    println!();

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : La fabrique
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : Fabrique (l'appel récursif en paramètre) ═══\n");
    println!("  factorialFactory(f) = n ↦ n == 0 ? 1 : n * f(n - 1)\n");

    // La vraie factorielle est un point fixe de la fabrique
    let named = func(direct::factorial);
    let one_step = factorial_factory(named.clone());
    match law::check_agreement(&named, &one_step, inputs.clone()) {
        Ok(()) => println!("✓ factorialFactory(factorial) = factorial : c'est un point fixe\n"),
        Err(violations) => {
            for v in violations {
                println!("✗ {}", v);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Les approximations bornées
    // ═══════════════════════════════════════════════════════════
    println!(
        "═══ ÉTAPE 3 : Approximations bornées (graine : {}) ═══\n",
        config.seed
    );

    let chain = ApproximationChain::factorial(config.chain_length, seed(config.seed));
    for (k, approx) in chain.iter() {
        let n = k as u64 + 1;
        println!(
            "  factorialUpTo{:<2} : ({}) = {:<8} ({}) = {}",
            k,
            k,
            approx(k as u64),
            n,
            approx(n)
        );
    }
    println!();
    for (k, bound) in chain.factorial_bounds().into_iter().enumerate() {
        match bound {
            Some(bound) => println!("  ✓ factorialUpTo{} est juste jusqu'à {}", k, bound),
            None => println!("  ✗ factorialUpTo{} est faux dès 0", k),
        }
    }
    println!("\n  → chaque application de la fabrique ajoute UN entier valide.\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Le point fixe littéral
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 4 : Point fixe littéral Y(f) = f(Y(f)) ═══\n");
    println!("  En évaluation stricte, Y(f) est évalué AVANT d'appeler f :");
    println!("  Y(f) → Y(f) → Y(f) → ... la pile déborde sans atteindre 0.");
    println!("  (fix_eager n'est pas exécuté ici : il avorte le processus.)\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 5 : Différer le dépliage
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 5 : Point fixe différé Y(f) = n ↦ f(Y(f))(n) ═══\n");

    let thunked = fix_thunked(factory(factorial_factory));
    for n in [0, 5, config.max_input] {
        println!("  Y(factorialFactory)({:>2}) = {}", n, thunked(n));
    }
    println!("\n  ✓ Correct, mais Y se nomme encore lui-même.\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 6 : L'auto-application
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 6 : Auto-application X(X) ═══\n");
    println!("  X(autre) = f ↦ n ↦ f(autre(autre)(f))(n)");
    println!("  Y        = X(X)\n");

    let fact_factory = factory(factorial_factory);
    let named_y: Fixer<u64, u64> = y();
    let literal_y: Fixer<u64, u64> = y_closure();
    let by_name = named_y(fact_factory.clone());
    let by_literal = literal_y(fact_factory.clone());

    for n in [0, 5, config.max_input] {
        println!("  Y(factorialFactory)({:>2}) = {}", n, by_name(n));
    }
    println!();

    for (label, fixer) in [("fonction nommée", &named_y), ("fermeture littérale", &literal_y)] {
        match law::check_fixed_point_law(fixer, &fact_factory, inputs.clone()) {
            Ok(()) => println!("✓ Y(F) = F(Y(F)) ({})", label),
            Err(violations) => {
                for v in violations {
                    println!("✗ {} : {}", label, v);
                }
            }
        }
    }
    match law::check_agreement(&by_name, &by_literal, inputs.clone()) {
        Ok(()) => println!("✓ Les deux formulations coïncident\n"),
        Err(violations) => {
            for v in violations {
                println!("✗ {}", v);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 7 : Toute fabrique, toute arité
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 7 : Toute fabrique, toute arité ═══\n");

    let fib = fix(fibonacci_factory);
    println!("  Y(fibonacciFactory)({}) = {}", config.fibonacci_input, fib(config.fibonacci_input));

    let gcd = fix(gcd_factory);
    println!("  Y(gcdFactory)((48, 180)) = {}", gcd((48, 180)));

    let sum = fix(sum_factory);
    println!("  Y(sumFactory)([1, 2, ..., 10]) = {}", sum((1..=10).collect()));

    let exact = fix(checked_factorial_factory);
    for n in [20, 21] {
        match exact(n) {
            Ok(value) => println!("  ✓ {}! = {}", n, value),
            Err(e) => println!("  ✗ {}", e),
        }
    }

    println!("\n═══════════════════════════════════════════════════");
    println!("Dérivation complète !");
    println!("  {} approximations bornées, chacune juste jusqu'à son rang", chain.len());
    println!("  1 combinateur Y, 2 formulations, aucune auto-référence");
    println!("  arités démontrées : 1 (n), 2 (a, b), quelconque ([x, ...])");
    println!("═══════════════════════════════════════════════════");
}

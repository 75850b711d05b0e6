// =============================================================================
// Le point fixe littéral Y(f) = f(Y(f)) déborde la pile en évaluation stricte.
// =============================================================================
//
// Un débordement de pile avorte le processus entier : on ne peut pas
// l'attraper dans le test lui-même. Le test se relance donc comme processus
// fils (même binaire, même nom de test) avec une variable d'environnement ;
// le fils exécute fix_eager, le parent vérifie qu'il a avorté.
//
// =============================================================================

use std::env;
use std::process::Command;

use fixrust::core::factory::factorial_factory;
use fixrust::core::fix::{fix_eager, fix_thunked, y};
use fixrust::core::func::factory;

const CHILD_MARKER: &str = "FIXRUST_EAGER_CHILD";

#[test]
fn eager_fixed_point_exhausts_the_stack() {
    if env::var_os(CHILD_MARKER).is_some() {
        // Le fils : ne revient jamais
        let fact = fix_eager(factory(factorial_factory));
        println!("unreachable: {}", fact(3));
        return;
    }

    let exe = env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["eager_fixed_point_exhausts_the_stack", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MARKER, "1")
        .output()
        .expect("spawn child test process");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "eager fixed point returned normally");
    assert!(stderr.contains("overflowed its stack"), "unexpected child stderr:\n{}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("unreachable"));
}

#[test]
fn thunked_fixed_points_terminate_on_the_same_factory() {
    let thunked = fix_thunked(factory(factorial_factory));
    let self_applied = y()(factory(factorial_factory));
    assert_eq!(thunked(3), 6);
    assert_eq!(self_applied(3), 6);
}

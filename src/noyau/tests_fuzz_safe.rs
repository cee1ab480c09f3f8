//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pilote sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés : jamais de panique, écran jamais vide ni plus long que sa capacité,
//!   jamais de "NaN" / "inf" à l’écran, un seul message d’erreur connu ou un nombre.

use std::time::{Duration, Instant};

use super::config::CAPACITE_AFFICHAGE;
use super::format::MESSAGE_DEBORDEMENT;
use super::Calculatrice;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariant d’affichage ------------------------ */

const MESSAGES: [&str; 6] = [
    "Syntax Error: Mismatched parentheses",
    "Syntax Error: Invalid expression",
    "Math Error: Division by zero",
    "Math Error: Domain error (e.g., sqrt(-1))",
    "Error: Operator stack overflow",
    MESSAGE_DEBORDEMENT,
];

/// Renvoie true si l’écran porte un nombre (false = message d’erreur connu).
fn check_affichage(expr: &str, affichage: &str) -> bool {
    assert!(!affichage.is_empty(), "écran vide pour expr={expr:?}");
    assert!(
        affichage.len() <= CAPACITE_AFFICHAGE,
        "écran trop long pour expr={expr:?}"
    );
    if MESSAGES.contains(&affichage) {
        return false;
    }
    let v: f64 = affichage
        .parse()
        .unwrap_or_else(|_| panic!("affichage inattendu {affichage:?} pour expr={expr:?}"));
    assert!(v.is_finite(), "non fini à l’écran: expr={expr:?} -> {affichage:?}");
    true
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers (0 inclus : divisions par zéro voulues) ou décimaux simples
    let a = rng.pick(10);
    if rng.coin() {
        format!("{a}")
    } else {
        format!("{a}.{}", rng.pick(100))
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "p".to_string(),
        1 => "e".to_string(),
        2 => format!("(-{})", gen_nombre(rng)),
        _ => gen_nombre(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    const OPS: [char; 6] = ['+', '-', '*', '/', '%', '^'];
    const FONCTIONS: [char; 13] = [
        's', 'c', 't', 'S', 'C', 'T', 'l', 'L', 'q', '!', 'E', 'R', 'N',
    ];

    match rng.pick(6) {
        0 => gen_atome(rng),
        1 | 2 => {
            let op = OPS[rng.pick(OPS.len() as u32) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
        3 => format!("({})", gen_expr(rng, depth - 1)),
        4 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        // juxtaposition : multiplication implicite
        _ => format!(
            "{}({})",
            gen_atome(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

/// Bruit : caractères pris dans tout l’alphabet de la calculatrice (et un peu au-delà).
fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789.+-*/%^()pesctSCTlLqERN! x#";
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut calc = Calculatrice::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for k in 0..300 {
        budget(t0, max);

        if k % 50 == 0 {
            calc.basculer_mode_angle();
        }

        let expr = gen_expr(&mut rng, 4);
        calc.evaluer(&expr);
        if check_affichage(&expr, calc.affichage()) {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut calc = Calculatrice::new();

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(40) as usize;
        let expr = gen_bruit(&mut rng, longueur);
        calc.evaluer(&expr);
        check_affichage(&expr, calc.affichage());
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    let mut ca = Calculatrice::new();
    let mut cb = Calculatrice::new();

    for _ in 0..50 {
        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);
        ca.evaluer(&ea);
        cb.evaluer(&eb);
        assert_eq!(ca.affichage(), cb.affichage(), "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_longues_chaines_bornees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);
    let mut calc = Calculatrice::new();

    // imbrication profonde : la capacité des piles tranche, sans gel
    for n in [10usize, 60, 120, 500] {
        budget(t0, max);
        let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        calc.evaluer(&expr);
        let attendu = if n < 100 {
            "1"
        } else {
            "Error: Operator stack overflow"
        };
        assert_eq!(calc.affichage(), attendu, "n={n}");
    }

    // entrée très longue sans opérateur empilé : juste des espaces
    let expr = format!("{}7{}", " ".repeat(10_000), " ".repeat(10_000));
    calc.evaluer(&expr);
    assert_eq!(calc.affichage(), "7");
    budget(t0, max);
}

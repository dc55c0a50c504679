//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte une seule erreur attendue sur entrées bien formées
//!   (division par zéro : le générateur peut en produire)
//! - invariants clés : déterminisme, et pile numérique == oracle arbre

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::{eval_rpn, evaluer};
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};
use super::signe::normalise_moins_unaire;

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

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    // petits entiers et quelques décimaux, incluant 0 (utile pour
    // provoquer des divisions par zéro)
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(100))
    }
}

fn gen_operateur(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "+",
        1 => "-",
        2 => "*",
        _ => "/",
    }
}

/// Expression bien formée, profondeur bornée.
/// Le moins unaire n'est émis QUE devant un littéral (le pliage ne
/// supporte ni "-(" ni "--", et c'est voulu).
fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        let atome = gen_atome(rng);
        return if rng.pick(5) == 0 {
            format!("-{atome}")
        } else {
            atome
        };
    }

    let gauche = gen_expr(rng, profondeur - 1);
    let droite = gen_expr(rng, profondeur - 1);
    let op = gen_operateur(rng);

    // le moins unaire après opérateur doit coller à un littéral :
    // on ne parenthèse jamais une sous-expression qui commence par '-'
    let droite = if droite.starts_with('-') {
        droite
    } else if rng.coin() {
        format!("({droite})")
    } else {
        droite
    };

    let gauche = if gauche.starts_with('-') {
        gauche
    } else if rng.coin() {
        format!("({gauche})")
    } else {
        gauche
    };

    format!("{gauche} {op} {droite}")
}

/* ------------------------ Les tests ------------------------ */

#[test]
fn fuzz_determinisme_et_oracle() {
    let start = Instant::now();
    let max = Duration::from_secs(10);

    let mut rng = Rng::new(0xCA1C);

    for tour in 0..500 {
        budget(start, max);

        let profondeur = 1 + rng.pick(3);
        let s = gen_expr(&mut rng, profondeur);

        // déterminisme : deux appels, même issue
        let r1 = evaluer(&s);
        let r2 = evaluer(&s);
        assert_eq!(r1, r2, "tour {tour}: non déterministe pour {s:?}");

        // seule erreur admissible sur une entrée bien formée
        if let Err(e) = &r1 {
            assert_eq!(
                *e,
                ErreurEval::DivisionParZero,
                "tour {tour}: erreur inattendue pour {s:?}"
            );
            continue;
        }

        // oracle : l'arbre reconstruit depuis la RPN donne le même f64
        let jetons = normalise_moins_unaire(&tokenize(&s).unwrap()).unwrap();
        let rpn = to_rpn(&jetons).unwrap();
        let via_pile = eval_rpn(&rpn).unwrap();
        let via_arbre = from_rpn(&rpn).unwrap().eval().unwrap();
        assert_eq!(
            via_pile, via_arbre,
            "tour {tour}: divergence pile/arbre pour {s:?}"
        );
        assert_eq!(r1, Ok(via_pile), "tour {tour}: divergence pipeline/RPN pour {s:?}");
    }
}

#[test]
fn fuzz_entrees_hostiles_ne_paniquent_pas() {
    let start = Instant::now();
    let max = Duration::from_secs(10);

    let mut rng = Rng::new(0xF00D);
    let alphabet: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '%', '(', ')', ' ', 'x', ';',
    ];

    for _ in 0..2000 {
        budget(start, max);

        let len = rng.pick(12) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // jamais de panique : soit un f64, soit une erreur typée
        let _ = evaluer(&s);
    }
}

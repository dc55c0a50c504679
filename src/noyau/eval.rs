//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> normalise moins unaire -> RPN (shunting-yard) -> pile numérique
//!
//! Chaque appel est une fonction pure `texte -> f64` : aucune allocation
//! ne survit au retour, deux appels identiques donnent le même résultat.

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;
use super::signe::normalise_moins_unaire;

/// Étapes intermédiaires du pipeline, rendues en texte (debug/"démarche").
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression infixe, retourne un f64.
pub fn evaluer(expr_str: &str) -> Result<f64, ErreurEval> {
    Ok(evaluer_avec_demarche(expr_str)?.0)
}

/// Variante qui retourne aussi la démarche (jetons normalisés + RPN).
pub fn evaluer_avec_demarche(expr_str: &str) -> Result<(f64, Demarche), ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::ExpressionMalformee);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) Moins unaire plié dans les littéraux
    let jetons = normalise_moins_unaire(&jetons)?;
    let jetons_txt = format_tokens(&jetons);

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);

    // 4) Pile numérique
    let valeur = eval_rpn(&rpn)?;

    let d = Demarche {
        jetons: jetons_txt,
        rpn: rpn_txt,
    };

    Ok((valeur, d))
}

/// Évalue une RPN avec une pile de f64.
///
/// Un opérateur dépile exactement deux valeurs : la plus récente est
/// l'opérande DROITE (`a b -` calcule a - b, pas b - a).
/// Invariant de sortie : exactement une valeur sur la pile.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => pile.push(*v),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = pile.pop().ok_or(ErreurEval::ExpressionMalformee)?;
                let a = pile.pop().ok_or(ErreurEval::ExpressionMalformee)?;

                let r = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                pile.push(r);
            }

            // réservé : signale, n'évalue jamais
            Tok::Percent => return Err(ErreurEval::OperateurReserve),

            // une RPN bien formée ne contient jamais de parenthèse
            Tok::LPar | Tok::RPar => return Err(ErreurEval::ExpressionMalformee),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionMalformee);
    }
    Ok(pile.pop().unwrap())
}

// src/noyau/rpn.rs
//
// Shunting-yard -> RPN, et reconstruction Expr depuis la RPN.
//
// Règles:
// - précédence : + - = 1 ; * / % = 2
// - tout est associatif à gauche (aucun opérateur associatif à droite
//   dans cette grammaire)
// - '(' barrière de précédence ; ')' dépile jusqu'à la '(' appariée
// - politique STRICTE sur les parenthèses : ')' orpheline ou '(' restante
//   en fin d'entrée => ParenthesesDesequilibrees (on ne les ignore pas)

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        // Percent a une entrée ici mais reste réservé (aucune règle d'éval)
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons (moins unaires déjà normalisés)
/// en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurEval::ParenthesesDesequilibrees);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence du sommet est >= la nôtre
                //   (>= car associatif à gauche)
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
///
/// Même machine à pile que l'évaluation numérique, mais elle empile des
/// noeuds au lieu de valeurs. Sert d'oracle : évaluer l'arbre doit donner
/// le même résultat que la pile numérique.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Num(v)),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::ExpressionMalformee)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionMalformee)?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::Percent => return Err(ErreurEval::OperateurReserve),

            // une RPN bien formée ne contient jamais de parenthèse
            Tok::LPar | Tok::RPar => return Err(ErreurEval::ExpressionMalformee),
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::ExpressionMalformee);
    }
    Ok(st.pop().unwrap())
}

// src/noyau/expr.rs
//
// Arbre d'expression fermé (variantes taguées).
// - Num : feuille numérique (f64)
// - Add/Sub/Mul/Div : noeuds binaires
//
// Une seule fonction d'évaluation, exhaustive : pas d'inspection de forme
// au runtime, ajouter une variante casse la compilation ici même.

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation récursive de l'arbre.
    /// Même politique de division par zéro que la machine à pile.
    pub fn eval(&self) -> Result<f64, ErreurEval> {
        use Expr::*;

        match self {
            Num(v) => Ok(*v),

            Add(a, b) => Ok(a.eval()? + b.eval()?),
            Sub(a, b) => Ok(a.eval()? - b.eval()?),
            Mul(a, b) => Ok(a.eval()? * b.eval()?),

            Div(a, b) => {
                let num = a.eval()?;
                let den = b.eval()?;
                if den == 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(num / den)
            }
        }
    }
}

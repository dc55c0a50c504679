//! Noyau d'évaluation
//!
//! Organisation interne :
//! - erreur.rs  : taxonomie des erreurs (typées, pas de String)
//! - jetons.rs  : tokenisation
//! - signe.rs   : normalisation du moins unaire (passe avant simple)
//! - rpn.rs     : shunting-yard + reconstruction Expr
//! - expr.rs    : arbre d'expression fermé (variantes taguées)
//! - eval.rs    : évaluation postfixe (pile) + pipeline complet
//!
//! Flux de données strictement linéaire :
//!   texte → jetons → jetons normalisés → RPN → f64
//!
//! Chaque appel est une fonction pure de son entrée : aucun état partagé
//! entre invocations, appels concurrents sûrs sans coordination.

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod jetons;
pub mod rpn;
pub mod signe;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluer, evaluer_avec_demarche};

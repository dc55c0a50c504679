// src/lib.rs
//
// Calculette RPN — noyau d'évaluation d'expressions infixes (flottant double)
// ---------------------------------------------------------------------------
// But:
// - évaluer une expression texte (+ - * /, parenthèses, moins unaire)
//   via le pipeline: jetons → moins unaire → RPN → pile numérique
// - aucune surface CLI/GUI ici : c'est au programme hôte de nous embarquer
//
// À côté du noyau: `flux`, une file à worker dédié (producteur/consommateur),
// indépendante du pipeline d'évaluation.

pub mod flux;
pub mod noyau;

// API publique minimale
pub use noyau::erreur::ErreurEval;
pub use noyau::eval::{evaluer, evaluer_avec_demarche, Demarche};

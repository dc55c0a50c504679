// src/noyau/signe.rs
//
// Normalisation du moins unaire.
//
// Règle : un '-' qui arrive là où aucune valeur ne précède (début d'entrée,
// ou juste après un opérateur ou '(') est unaire ; il se plie dans le
// littéral numérique qui le suit immédiatement ("-5" devient Num(-5)).
//
// Passe avant UNIQUE construisant une nouvelle séquence (pas de suppression
// en place pendant l'itération). Non récursif :
// - '-' unaire suivi de '(' (sous-expression négative)  => non supporté
// - '-' unaire suivi d'un autre '-' (double moins)      => non supporté
// Ces deux classes sont signalées explicitement, jamais devinées.

use super::erreur::ErreurEval;
use super::jetons::Tok;

/// Plie les moins unaires dans les littéraux qui les suivent.
pub fn normalise_moins_unaire(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());

    // "valeur" = littéral ou ')' (expression fermée).
    // Sert à distinguer '-' unaire de '-' binaire.
    let mut prev_etait_valeur = false;

    let mut i: usize = 0;
    while i < tokens.len() {
        let tok = &tokens[i];

        if matches!(tok, Tok::Minus) && !prev_etait_valeur {
            match tokens.get(i + 1) {
                Some(Tok::Num(v)) => {
                    out.push(Tok::Num(-v));
                    prev_etait_valeur = true;
                    i += 2;
                    continue;
                }
                Some(Tok::LPar) => {
                    return Err(ErreurEval::MoinsUnaireNonSupporte("(".into()));
                }
                Some(Tok::Minus) => {
                    return Err(ErreurEval::MoinsUnaireNonSupporte("-".into()));
                }
                // '-' unaire sans littéral derrière : opérande manquante
                _ => return Err(ErreurEval::ExpressionMalformee),
            }
        }

        prev_etait_valeur = matches!(tok, Tok::Num(_) | Tok::RPar);
        out.push(tok.clone());
        i += 1;
    }

    Ok(out)
}

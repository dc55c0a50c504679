// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque erreur est détectée par le composant le plus bas qui observe
// l'invariant violé, puis remonte telle quelle (pas de rattrapage local :
// le pipeline est pur, il n'y a rien à réessayer).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    /// Caractère hors grammaire (ni chiffre, ni opérateur, ni parenthèse).
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    /// Suite de chiffres qui ne parse pas en f64 (ex: deux points).
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    /// ')' sans '(' correspondante, ou '(' jamais fermée.
    /// Politique STRICTE : on signale, on n'ignore pas.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// La pile d'évaluation ne finit pas avec exactement une valeur
    /// (entrée vide, opérande manquante, opérateur en trop...).
    #[error("expression malformée")]
    ExpressionMalformee,

    /// Opérande droite de '/' exactement nulle.
    /// Politique unique : erreur typée, jamais ±inf/NaN.
    #[error("division par zéro")]
    DivisionParZero,

    /// '%' : présent dans la table de précédence, mais réservé —
    /// aucune règle d'évaluation. On signale clairement.
    #[error("opérateur réservé: '%'")]
    OperateurReserve,

    /// Moins unaire devant '(' ou devant un autre '-' :
    /// classe d'entrée explicitement non supportée (pas de pliage possible
    /// dans un littéral).
    #[error("moins unaire non supporté devant {0:?}")]
    MoinsUnaireNonSupporte(String),
}

// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Le texte Display de chaque variante EST le message affiché à l’écran :
// l’écran est le seul canal d’erreur vu par l’hôte.

use thiserror::Error;

/// Les deux visages d’une erreur de syntaxe (même type, messages différents).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    /// `)` sans `(` correspondante, ou `(` restée ouverte en fin d’entrée.
    #[error("Syntax Error: Mismatched parentheses")]
    ParenthesesDesequilibrees,

    /// Lexème non reconnu, littéral mal formé, opérande manquante, reste sur la pile…
    #[error("Syntax Error: Invalid expression")]
    ExpressionInvalide,
}

/// Erreur “verrouillée” par une évaluation (la première rencontrée gagne).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error("Math Error: Division by zero")]
    DivisionParZero,

    #[error("Math Error: Domain error (e.g., sqrt(-1))")]
    Domaine,

    /// Capacité d’une pile atteinte, ou cumul d’empilements d’opérateurs épuisé.
    #[error("Error: Operator stack overflow")]
    DebordementPile,
}

impl ErreurCalc {
    /// Raccourci : erreur de syntaxe “expression invalide”.
    pub const INVALIDE: ErreurCalc = ErreurCalc::Syntaxe(ErreurSyntaxe::ExpressionInvalide);

    /// Raccourci : erreur de syntaxe “parenthèses”.
    pub const PARENTHESES: ErreurCalc =
        ErreurCalc::Syntaxe(ErreurSyntaxe::ParenthesesDesequilibrees);
}

// src/noyau/calculatrice.rs
//
// Instance de calculatrice + pilote shunting-yard (une seule passe gauche -> droite).
//
// Politique d’erreur :
// - erreur FATALE (lexème illisible, ')' orpheline) : écran écrasé tout de suite, retour immédiat ;
// - erreur VERROUILLÉE (division par zéro, domaine, opérande manquante, débordement) :
//   l’opérateur fautif se termine (NaN empilé), la boucle s’arrête, pas de vidange,
//   puis l’écran affiche le message de la PREMIÈRE erreur.
//
// Pas de verrou interne : une instance = un appelant à la fois (`&mut self`).

use super::application::appliquer;
use super::config::{ConfigCalc, ModeAngle};
use super::erreur::ErreurCalc;
use super::format::formater_resultat;
use super::jetons::{ClasseJeton, Jeton, LecteurJetons};
use super::operateur::{OpBinaire, Operateur};
use super::pile::{PileOperandes, PileOperateurs};

/// Écran au repos.
const AFFICHAGE_REPOS: &str = "0";

#[derive(Clone, Debug)]
pub struct Calculatrice {
    affichage: String,
    capacite_affichage: usize,
    mode_angle: ModeAngle,
    operandes: PileOperandes,
    operateurs: PileOperateurs,
    erreur: Option<ErreurCalc>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculatrice {
    /// Écran "0", mode degrés, aucune erreur.
    pub fn new() -> Self {
        Self::avec_config(ConfigCalc::default())
    }

    pub fn avec_config(config: ConfigCalc) -> Self {
        let config = config.bornee();
        let mut affichage = String::with_capacity(config.capacite_affichage);
        affichage.push_str(AFFICHAGE_REPOS);

        Self {
            affichage,
            capacite_affichage: config.capacite_affichage,
            mode_angle: config.mode_angle,
            operandes: PileOperandes::avec_capacite(config.capacite_piles),
            operateurs: PileOperateurs::avec_capacite(config.capacite_piles),
            erreur: None,
        }
    }

    /* ------------------------ API hôte ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn basculer_mode_angle(&mut self) {
        self.mode_angle = self.mode_angle.bascule();
        log::debug!("mode d’angle : {}", self.mode_angle.libelle());
    }

    /// Écran à "0", erreur effacée ; le mode d’angle est conservé.
    pub fn clear(&mut self) {
        self.ecrire_affichage(AFFICHAGE_REPOS);
        self.erreur = None;
    }

    /// Erreur verrouillée par la dernière évaluation (introspection hôte / tests).
    pub fn erreur(&self) -> Option<ErreurCalc> {
        self.erreur
    }

    /// Évalue `expression` ; le résultat (ou le message d’erreur) se lit via `affichage()`.
    pub fn evaluer(&mut self, expression: &str) {
        self.operandes.vider();
        self.operateurs.reinitialiser();
        self.erreur = None;

        log::debug!("évaluation de {expression:?} ({})", self.mode_angle.libelle());

        if let Err(fatale) = self.parcourir(expression) {
            log::debug!("erreur fatale : {fatale}");
            self.erreur = Some(fatale);
            self.ecrire_affichage(&fatale.to_string());
            return;
        }

        if self.erreur.is_none() {
            self.vidanger();
        }

        let texte = self.rendu();
        log::debug!(
            "affichage : {texte} ({} opérateurs empilés)",
            self.operateurs.total_empile()
        );
        self.ecrire_affichage(&texte);
    }

    /* ------------------------ Pilote ------------------------ */

    /// Boucle sur les jetons. `Err` = erreur fatale ; les erreurs verrouillées
    /// arrêtent la boucle mais renvoient `Ok`.
    fn parcourir(&mut self, expression: &str) -> Result<(), ErreurCalc> {
        let mut lecteur = LecteurJetons::new(expression);
        let mut precedent = ClasseJeton::Aucune;

        while let Some(jeton) = lecteur.suivant(precedent)? {
            log::trace!("jeton {jeton} @{}", lecteur.curseur());

            // "2p", "3(4+5)", ")(" : '*' synthétisé, réduit comme un vrai opérateur
            if jeton.ouvre_valeur() && precedent.clot_valeur() {
                self.empiler_operateur(Operateur::Binaire(OpBinaire::Fois));
                if self.erreur.is_some() {
                    break;
                }
            }

            match jeton {
                Jeton::Nombre(v) => self.empiler_operande(v),
                Jeton::Constante(c) => self.empiler_operande(c.valeur()),
                Jeton::ParenOuvrante => self.pousser(Operateur::ParenOuvrante),
                // Les fonctions s’empilent sans réduction : "s(s30)" = sin(sin(30))
                Jeton::Fonction(f) => self.pousser(Operateur::Fonction(f)),
                Jeton::Operateur(op) => self.empiler_operateur(Operateur::Binaire(op)),
                Jeton::ParenFermante => self.fermer_parenthese()?,
            }

            if self.erreur.is_some() {
                break;
            }
            precedent = jeton.classe();
        }

        Ok(())
    }

    /// Réduit tant que le sommet l’exige, puis empile `op`.
    fn empiler_operateur(&mut self, op: Operateur) {
        while let Some(sommet) = self.operateurs.sommet() {
            if !sommet.reduit_avant(op) {
                break;
            }
            self.reduire_sommet();
            if self.erreur.is_some() {
                return;
            }
        }
        self.pousser(op);
    }

    /// Dépile et applique jusqu’à '(' ; ')' sans '(' est fatale.
    fn fermer_parenthese(&mut self) -> Result<(), ErreurCalc> {
        loop {
            match self.operateurs.sommet() {
                Some(Operateur::ParenOuvrante) => {
                    self.operateurs.depiler();
                    return Ok(());
                }
                Some(_) => {
                    self.reduire_sommet();
                    if self.erreur.is_some() {
                        return Ok(());
                    }
                }
                None => return Err(ErreurCalc::PARENTHESES),
            }
        }
    }

    /// Fin d’entrée : applique tout ce qui reste ; une '(' restante est une erreur de syntaxe.
    fn vidanger(&mut self) {
        while let Some(sommet) = self.operateurs.sommet() {
            if self.erreur.is_some() {
                break;
            }
            if sommet == Operateur::ParenOuvrante {
                self.verrouiller(ErreurCalc::PARENTHESES);
                break;
            }
            self.reduire_sommet();
        }
    }

    fn reduire_sommet(&mut self) {
        if let Some(op) = self.operateurs.depiler() {
            if let Err(e) = appliquer(op, &mut self.operandes, self.mode_angle) {
                self.verrouiller(e);
            }
        }
    }

    fn pousser(&mut self, op: Operateur) {
        if let Err(e) = self.operateurs.empiler(op) {
            self.verrouiller(e);
        }
    }

    fn empiler_operande(&mut self, v: f64) {
        if let Err(e) = self.operandes.empiler(v) {
            self.verrouiller(e);
        }
    }

    /// Première erreur gagnante : jamais écrasée.
    fn verrouiller(&mut self, e: ErreurCalc) {
        if self.erreur.is_none() {
            log::debug!("erreur verrouillée : {e}");
            self.erreur = Some(e);
        }
    }

    /* ------------------------ Rendu ------------------------ */

    fn rendu(&mut self) -> String {
        if let Some(e) = self.erreur {
            return e.to_string();
        }
        if self.operandes.len() == 1 {
            if let Some(v) = self.operandes.depiler() {
                return formater_resultat(v);
            }
        }
        // vide ("") ou plusieurs valeurs sans opérateur
        self.erreur = Some(ErreurCalc::INVALIDE);
        ErreurCalc::INVALIDE.to_string()
    }

    /// Copie bornée à la capacité de l’écran (coupure sur une frontière de caractère).
    fn ecrire_affichage(&mut self, texte: &str) {
        let mut fin = texte.len().min(self.capacite_affichage);
        while !texte.is_char_boundary(fin) {
            fin -= 1;
        }
        self.affichage.clear();
        self.affichage.push_str(&texte[..fin]);
    }
}

// src/noyau/format.rs

/// Affichage d’un résultat flottant.
///
/// `Display` de f64 donne la plus courte écriture qui se relit à l’identique
/// ("4" et non "4.0", "0.1", "143"). Seul cas retouché : -0 s’affiche "0".
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

/// Texte final d’une évaluation : "<saisie> = <résultat>".
pub fn format_resultat(saisie: &str, valeur: f64) -> String {
    format!("{saisie} = {}", format_nombre(valeur))
}

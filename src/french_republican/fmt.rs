//! Names and numerals of the French Republican calendar.

use crate::error::Error;

pub const MONTH_NAMES: [&str; 13] = [
    "Vendémiaire",
    "Brumaire",
    "Frimaire",
    "Nivôse",
    "Pluviôse",
    "Ventôse",
    "Germinal",
    "Floréal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "Sans-culottides",
];

/// Names of the ten days of a décade.
pub const WEEKDAY_NAMES: [&str; 10] = [
    "Primidi", "Duodi", "Tridi", "Quartidi", "Quintidi", "Sextidi", "Septidi", "Octidi", "Nonidi",
    "Décadi",
];

/// Names of the complementary days closing the year.
pub const FESTIVALS: [&str; 6] = [
    "La Fête de la Vertu",
    "La Fête du Génie",
    "La Fête du Travail",
    "La Fête de l'Opinion",
    "La Fête des Récompenses",
    "La Fête de la Révolution",
];

/// The rural calendar: one plant, animal or tool for each day of the twelve
/// regular months.
#[rustfmt::skip]
pub const DAY_NAMES: [[&str; 30]; 12] = [
    // Vendémiaire
    [
        "Raisin", "Safran", "Châtaigne", "Colchique", "Cheval",
        "Balsamine", "Carotte", "Amaranthe", "Panais", "Cuve",
        "Pomme de terre", "Immortelle", "Potiron", "Réséda", "Âne",
        "Belle de nuit", "Citrouille", "Sarrasin", "Tournesol", "Pressoir",
        "Chanvre", "Pêche", "Navet", "Amaryllis", "Bœuf",
        "Aubergine", "Piment", "Tomate", "Orge", "Tonneau",
    ],
    // Brumaire
    [
        "Pomme", "Céleri", "Poire", "Betterave", "Oie",
        "Héliotrope", "Figue", "Scorsonère", "Alisier", "Charrue",
        "Salsifis", "Mâcre", "Topinambour", "Endive", "Dindon",
        "Chervis", "Cresson", "Dentelaire", "Grenade", "Herse",
        "Bacchante", "Azerole", "Garance", "Orange", "Faisan",
        "Pistache", "Macjonc", "Coing", "Cormier", "Rouleau",
    ],
    // Frimaire
    [
        "Raiponce", "Turneps", "Chicorée", "Nèfle", "Cochon",
        "Mâche", "Chou-fleur", "Miel", "Genièvre", "Pioche",
        "Cire", "Raifort", "Cèdre", "Sapin", "Chevreuil",
        "Ajonc", "Cyprès", "Lierre", "Sabine", "Hoyau",
        "Érable à sucre", "Bruyère", "Roseau", "Oseille", "Grillon",
        "Pignon", "Liège", "Truffe", "Olive", "Pelle",
    ],
    // Nivôse
    [
        "Tourbe", "Houille", "Bitume", "Soufre", "Chien",
        "Lave", "Terre végétale", "Fumier", "Salpêtre", "Fléau",
        "Granit", "Argile", "Ardoise", "Grès", "Lapin",
        "Silex", "Marne", "Pierre à chaux", "Marbre", "Van",
        "Pierre à plâtre", "Sel", "Fer", "Cuivre", "Chat",
        "Étain", "Plomb", "Zinc", "Mercure", "Crible",
    ],
    // Pluviôse
    [
        "Lauréole", "Mousse", "Fragon", "Perce-neige", "Taureau",
        "Laurier-thym", "Amadouvier", "Mézéréon", "Peuplier", "Coignée",
        "Ellébore", "Brocoli", "Laurier", "Avelinier", "Vache",
        "Buis", "Lichen", "If", "Pulmonaire", "Serpette",
        "Thlaspi", "Thimelé", "Chiendent", "Trainasse", "Lièvre",
        "Guède", "Noisetier", "Cyclamen", "Chélidoine", "Traîneau",
    ],
    // Ventôse
    [
        "Tussilage", "Cornouiller", "Violier", "Troène", "Bouc",
        "Asaret", "Alaterne", "Violette", "Marceau", "Bêche",
        "Narcisse", "Orme", "Fumeterre", "Vélar", "Chêvre",
        "Épinard", "Doronic", "Mouron", "Cerfeuil", "Cordeau",
        "Mandragore", "Persil", "Cochléaria", "Pâquerette", "Thon",
        "Pissenlit", "Sylvie", "Capillaire", "Frêne", "Plantoir",
    ],
    // Germinal
    [
        "Primevère", "Platane", "Asperge", "Tulipe", "Poule",
        "Bette", "Bouleau", "Jonquille", "Aulne", "Couvoir",
        "Pervenche", "Charme", "Morille", "Hêtre", "Abeille",
        "Laitue", "Mélèze", "Ciguë", "Radis", "Ruche",
        "Gainier", "Romaine", "Marronnier", "Roquette", "Pigeon",
        "Lilas", "Anémone", "Pensée", "Myrtille", "Greffoir",
    ],
    // Floréal
    [
        "Rose", "Chêne", "Fougère", "Aubépine", "Rossignol",
        "Ancolie", "Muguet", "Champignon", "Hyacinthe", "Râteau",
        "Rhubarbe", "Sainfoin", "Bâton d'or", "Charmerisier", "Ver à soie",
        "Consoude", "Pimprenelle", "Corbeille d'or", "Arroche", "Sarcloir",
        "Statice", "Fritillaire", "Bourrache", "Valériane", "Carpe",
        "Fusain", "Civette", "Buglosse", "Sénevé", "Houlette",
    ],
    // Prairial
    [
        "Luzerne", "Hémérocalle", "Trèfle", "Angélique", "Canard",
        "Mélisse", "Fromental", "Martagon", "Serpolet", "Faux",
        "Fraise", "Bétoine", "Pois", "Acacia", "Caille",
        "Œillet", "Sureau", "Pavot", "Tilleul", "Fourche",
        "Barbeau", "Camomille", "Chèvrefeuille", "Caille-lait", "Tanche",
        "Jasmin", "Verveine", "Thym", "Pivoine", "Chariot",
    ],
    // Messidor
    [
        "Seigle", "Avoine", "Oignon", "Véronique", "Mulet",
        "Romarin", "Concombre", "Échalote", "Absinthe", "Faucille",
        "Coriandre", "Artichaut", "Girofle", "Lavande", "Chamois",
        "Tabac", "Groseille", "Gesse", "Cerise", "Parc",
        "Menthe", "Cumin", "Haricot", "Orcanète", "Pintade",
        "Sauge", "Ail", "Vesce", "Blé", "Chalémie",
    ],
    // Thermidor
    [
        "Épeautre", "Bouillon blanc", "Melon", "Ivraie", "Bélier",
        "Prêle", "Armoise", "Carthame", "Mûre", "Arrosoir",
        "Panic", "Salicorne", "Abricot", "Basilic", "Brebis",
        "Guimauve", "Lin", "Amande", "Gentiane", "Écluse",
        "Carline", "Câprier", "Lentille", "Aunée", "Loutre",
        "Myrte", "Colza", "Lupin", "Coton", "Moulin",
    ],
    // Fructidor
    [
        "Prune", "Millet", "Lycoperdon", "Escourgeon", "Saumon",
        "Tubéreuse", "Sucrion", "Apocyn", "Réglisse", "Échelle",
        "Pastèque", "Fenouil", "Épine vinette", "Noix", "Truite",
        "Citron", "Cardère", "Nerprun", "Tagette", "Hotte",
        "Églantier", "Noisette", "Houblon", "Sorgho", "Écrevisse",
        "Bigarade", "Verge d'or", "Maïs", "Marron", "Panier",
    ],
];

const ROMAN_DIGITS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest number expressible without overlined numerals.
pub const ROMAN_MAX: u32 = 3999;

/// Writes `num` in Roman numerals.
///
/// # Example
///
/// ```
/// use almanako::french_republican::fmt::to_roman;
///
/// assert_eq!(Ok("CXCV".to_owned()), to_roman(195));
/// assert!(to_roman(0).is_err());
/// ```
pub fn to_roman(num: u32) -> Result<String, Error> {
    if !(1..=ROMAN_MAX).contains(&num) {
        return Err(Error::InvalidNumeral {
            numeral: num.to_string(),
            reason: "only 1 through 3999 can be written",
        });
    }
    let mut rest = num;
    let mut rt = String::new();
    for &(value, digits) in &ROMAN_DIGITS {
        while rest >= value {
            rt += digits;
            rest -= value;
        }
    }
    Ok(rt)
}

/// Reads a Roman numeral, in either case.
///
/// Only the canonical subtractive form is accepted, so `IIII` and `IC` are
/// rejected.
///
/// # Example
///
/// ```
/// use almanako::french_republican::fmt::from_roman;
///
/// assert_eq!(Ok(1999), from_roman("MCMXCIX"));
/// assert_eq!(Ok(14), from_roman("xiv"));
/// assert!(from_roman("T").is_err());
/// ```
pub fn from_roman(numeral: &str) -> Result<u32, Error> {
    let invalid = |reason| Error::InvalidNumeral {
        numeral: numeral.to_owned(),
        reason,
    };
    let upper = numeral.to_ascii_uppercase();
    let values = upper
        .chars()
        .map(|c| match c {
            'I' => Ok(1),
            'V' => Ok(5),
            'X' => Ok(10),
            'L' => Ok(50),
            'C' => Ok(100),
            'D' => Ok(500),
            'M' => Ok(1000),
            _ => Err(invalid("not a Roman digit")),
        })
        .collect::<Result<Vec<u32>, _>>()?;
    if values.is_empty() {
        return Err(invalid("empty numeral"));
    }

    let mut total = 0;
    for (i, &v) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if next > v => total -= v as i64,
            _ => total += v as i64,
        }
    }
    let total = u32::try_from(total).map_err(|_| invalid("not in canonical form"))?;
    if total > ROMAN_MAX {
        return Err(invalid("value exceeds 3999"));
    }
    match to_roman(total) {
        Ok(canonical) if canonical == upper => Ok(total),
        _ => Err(invalid("not in canonical form")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_twenty() {
        let expected = [
            "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII",
            "XIV", "XV", "XVI", "XVII", "XVIII", "XIX", "XX",
        ];
        for (n, roman) in (1..).zip(expected) {
            assert_eq!(Ok(roman.to_owned()), to_roman(n));
            assert_eq!(Ok(n), from_roman(roman));
        }
    }

    #[test]
    fn large_numbers() {
        assert_eq!(Ok("MMMCMXCIX".to_owned()), to_roman(3999));
        assert_eq!(Ok("CCXXXV".to_owned()), to_roman(235));
        assert!(to_roman(4000).is_err());
        assert!(from_roman("MMMM").is_err());
    }

    #[test]
    fn rejects_non_canonical_numerals() {
        assert!(from_roman("IIII").is_err());
        assert!(from_roman("IC").is_err());
        assert!(from_roman("VX").is_err());
        assert!(from_roman("").is_err());
    }

    #[test]
    fn rural_calendar() {
        assert_eq!("Raisin", DAY_NAMES[0][0]);
        assert_eq!("Cerfeuil", DAY_NAMES[5][18]);
        assert_eq!("Chalémie", DAY_NAMES[9][29]);
        assert_eq!("Panier", DAY_NAMES[11][29]);
    }
}

//! Built-in word data: irregular plurals, words that never inflect, and the
//! word lists that decide which suffix rule applies to an ambiguous ending.
//!
//! Everything here is lower case. All of the lists are fixed at compile
//! time, and the lookup maps are built once on first use.
use crate::classical::Flag;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

// Plurals that no suffix rule produces. The first entry for a plural wins
// when going back to the singular, so "bases" becomes "basis", not "base".
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("alga", "algae"),
    ("alumna", "alumnae"),
    ("alumnus", "alumni"),
    ("axis", "axes"),
    ("bacterium", "bacteria"),
    ("basis", "bases"),
    ("child", "children"),
    ("codex", "codices"),
    ("criterion", "criteria"),
    ("crisis", "crises"),
    ("datum", "data"),
    ("die", "dice"),
    ("erratum", "errata"),
    ("fez", "fezzes"),
    ("foot", "feet"),
    ("genus", "genera"),
    ("goose", "geese"),
    ("graffito", "graffiti"),
    ("hanger-on", "hangers-on"),
    ("larva", "larvae"),
    ("looker-on", "lookers-on"),
    ("louse", "lice"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("mongoose", "mongooses"),
    ("mouse", "mice"),
    ("nucleus", "nuclei"),
    ("oasis", "oases"),
    ("ovum", "ova"),
    ("ox", "oxen"),
    ("passer-by", "passers-by"),
    ("phenomenon", "phenomena"),
    ("quiz", "quizzes"),
    ("runner-up", "runners-up"),
    ("stimulus", "stimuli"),
    ("stratum", "strata"),
    ("tooth", "teeth"),
    ("vertebra", "vertebrae"),
    ("woman", "women"),
];

// singular => modern plural | classical plural
static ANCIENT_PLURALS: &[(&str, &str, &str)] = &[
    ("amoeba", "amoebas", "amoebae"),
    ("antenna", "antennas", "antennae"),
    ("apex", "apexes", "apices"),
    ("appendix", "appendixes", "appendices"),
    ("aquarium", "aquariums", "aquaria"),
    ("automaton", "automatons", "automata"),
    ("beau", "beaus", "beaux"),
    ("brother", "brothers", "brethren"),
    ("bureau", "bureaus", "bureaux"),
    ("cactus", "cactuses", "cacti"),
    ("chateau", "chateaus", "chateaux"),
    ("cherub", "cherubs", "cherubim"),
    ("corpus", "corpuses", "corpora"),
    ("cortex", "cortexes", "cortices"),
    ("cow", "cows", "kine"),
    ("curriculum", "curriculums", "curricula"),
    ("dogma", "dogmas", "dogmata"),
    ("focus", "focuses", "foci"),
    ("formula", "formulas", "formulae"),
    ("forum", "forums", "fora"),
    ("fungus", "funguses", "fungi"),
    ("hyperbola", "hyperbolas", "hyperbolae"),
    ("index", "indexes", "indices"),
    ("lemma", "lemmas", "lemmata"),
    ("libretto", "librettos", "libretti"),
    ("maximum", "maximums", "maxima"),
    ("medium", "mediums", "media"),
    ("memorandum", "memorandums", "memoranda"),
    ("millennium", "millenniums", "millennia"),
    ("minimum", "minimums", "minima"),
    ("nebula", "nebulas", "nebulae"),
    ("nova", "novas", "novae"),
    ("octopus", "octopuses", "octopodes"),
    ("optimum", "optimums", "optima"),
    ("plateau", "plateaus", "plateaux"),
    ("quantum", "quantums", "quanta"),
    ("radius", "radiuses", "radii"),
    ("referendum", "referendums", "referenda"),
    ("schema", "schemas", "schemata"),
    ("seraph", "seraphs", "seraphim"),
    ("soprano", "sopranos", "soprani"),
    ("spectrum", "spectrums", "spectra"),
    ("stadium", "stadiums", "stadia"),
    ("stigma", "stigmas", "stigmata"),
    ("supernova", "supernovas", "supernovae"),
    ("syllabus", "syllabuses", "syllabi"),
    ("symposium", "symposiums", "symposia"),
    ("tableau", "tableaus", "tableaux"),
    ("tempo", "tempos", "tempi"),
    ("trousseau", "trousseaus", "trousseaux"),
    ("vertex", "vertexes", "vertices"),
    ("virtuoso", "virtuosos", "virtuosi"),
    ("vortex", "vortexes", "vortices"),
];

static PERSONS_PLURALS: &[(&str, &str, &str)] = &[("person", "people", "persons")];

/// One built-in noun whose plural is not left to the suffix rules.
#[derive(Debug)]
pub(crate) struct IrregularNoun {
    pub(crate) singular: &'static str,
    pub(crate) modern_plural: &'static str,
    /// The plural used instead of the modern one when the given flag is set.
    pub(crate) classical_plural: Option<(Flag, &'static str)>,
}

static IRREGULAR_NOUNS: Lazy<Vec<IrregularNoun>> = Lazy::new(|| {
    let mut nouns = IRREGULAR_PLURALS
        .iter()
        .map(|&(singular, modern_plural)| IrregularNoun {
            singular,
            modern_plural,
            classical_plural: None,
        })
        .collect::<Vec<IrregularNoun>>();
    for (flag, table) in [
        (Flag::Ancient, ANCIENT_PLURALS),
        (Flag::Persons, PERSONS_PLURALS),
    ] {
        nouns.extend(
            table
                .iter()
                .map(|&(singular, modern_plural, classical)| IrregularNoun {
                    singular,
                    modern_plural,
                    classical_plural: Some((flag, classical)),
                }),
        );
    }
    nouns
});

// For words with dashes like "passer-by" we also add a version where the
// dashes are replaced with spaces, e.g. "passer by".
fn spelling_variants(singular: &str, plural: &str) -> Vec<(String, String)> {
    let mut variants = vec![(singular.to_string(), plural.to_string())];
    if singular.contains('-') {
        variants.push((singular.replace('-', " "), plural.replace('-', " ")));
    }
    variants
}

pub(crate) static MODERN_PLURAL_OF: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for noun in IRREGULAR_NOUNS.iter() {
        for (singular, plural) in spelling_variants(noun.singular, noun.modern_plural) {
            map.entry(singular).or_insert(plural);
        }
    }
    map
});

pub(crate) static CLASSICAL_PLURAL_OF: Lazy<HashMap<String, (Flag, String)>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for noun in IRREGULAR_NOUNS.iter() {
        if let Some((flag, classical)) = noun.classical_plural {
            for (singular, plural) in spelling_variants(noun.singular, classical) {
                map.entry(singular).or_insert((flag, plural));
            }
        }
    }
    map
});

// Both the modern and the classical plural of a word lead back to the same
// singular.
pub(crate) static SINGULAR_OF: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for noun in IRREGULAR_NOUNS.iter() {
        let plurals = std::iter::once(noun.modern_plural)
            .chain(noun.classical_plural.map(|(_, c)| c));
        for plural in plurals {
            for (singular, plural) in spelling_variants(noun.singular, plural) {
                map.entry(plural).or_insert(singular);
            }
        }
    }
    map
});

/// Nouns whose plural is the same as their singular.
pub(crate) static UNINFLECTED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "advice",
        "aircraft",
        "athletics",
        "barracks",
        "bellows",
        "billiards",
        "cattle",
        "chassis",
        "cod",
        "corps",
        "crossroads",
        "debris",
        "diabetes",
        "economics",
        "equipment",
        "ethics",
        "evidence",
        "feedback",
        "furniture",
        "gallows",
        "gymnastics",
        "hardware",
        "headquarters",
        "herpes",
        "homework",
        "hovercraft",
        "information",
        "innings",
        "jeans",
        "knowledge",
        "kudos",
        "linguistics",
        "luggage",
        "mathematics",
        "means",
        "measles",
        "mews",
        "moose",
        "mumps",
        "music",
        "news",
        "offspring",
        "pants",
        "physics",
        "pliers",
        "police",
        "politics",
        "rabies",
        "reggae",
        "rendezvous",
        "research",
        "rice",
        "salmon",
        "scissors",
        "series",
        "shorts",
        "shrimp",
        "software",
        "spacecraft",
        "species",
        "squid",
        "tongs",
        "traffic",
        "trousers",
        "trout",
        "tuna",
        "tweezers",
        "watercraft",
    ]
    .iter()
    .copied()
    .collect()
});

/// Endings that never inflect: "goldfish", "Iroquois", "bighorn sheep",
/// "reindeer", "smallpox", "arthritis".
pub(crate) const UNINFLECTED_ENDINGS: &[&str] = &["fish", "ois", "sheep", "deer", "pox", "itis"];

/// Animals that take no plural ending when the herd flag is set.
pub(crate) static HERD: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bison",
        "buffalo",
        "caribou",
        "dace",
        "eland",
        "elk",
        "grouse",
        "guinea fowl",
        "guinea-fowl",
        "haddock",
        "hake",
        "halibut",
        "herring",
        "mackerel",
        "pickerel",
        "pike",
        "rhinoceros",
        "roe",
        "seed",
        "shad",
        "snipe",
        "swine",
        "teal",
        "turbot",
        "water fowl",
        "water-fowl",
        "wildebeest",
        "zucchini",
    ]
    .iter()
    .copied()
    .collect()
});

// The lists below steer the suffix rules. Lists named *_ENDINGS are matched
// against the end of the singular form, so "bookshelf" matches "elf". Lists
// named *_WORDS must match the singular form as a whole word, optionally as
// the last word of a compound, so "olive" does not match "life".

/// "-ch" pronounced as "k", pluralized with a plain "s".
pub(crate) const CH_K_ENDINGS: &[&str] = &[
    "czech",
    "epoch",
    "eunuch",
    "hierarch",
    "loch",
    "matriarch",
    "monarch",
    "oligarch",
    "patriarch",
    "stomach",
    "tech",
    "tetrarch",
    "triptych",
];

/// Singulars ending in "-che" whose plural would otherwise look like
/// "-ch" + "es".
pub(crate) const CHE_WORDS: &[&str] = &[
    "ache",
    "attache",
    "avalanche",
    "backache",
    "cache",
    "cliche",
    "creche",
    "douche",
    "earache",
    "fiche",
    "headache",
    "heartache",
    "microfiche",
    "moustache",
    "mustache",
    "niche",
    "panache",
    "pastiche",
    "psyche",
    "quiche",
    "stomachache",
    "toothache",
];

/// "-f" => "-ves".
pub(crate) const F_VES_ENDINGS: &[&str] = &[
    "calf", "dwarf", "elf", "half", "hoof", "leaf", "loaf", "scarf", "sheaf", "thief", "wharf",
    "wolf",
];

/// "-fe" => "-ves".
pub(crate) const FE_VES_ENDINGS: &[&str] = &["knife", "wife"];

pub(crate) const LIFE_WORDS: &[&str] = &["afterlife", "life"];

/// Consonant + "o" words that take a plain "s".
pub(crate) const O_OS_ENDINGS: &[&str] = &[
    "albino",
    "alto",
    "armadillo",
    "avocado",
    "bingo",
    "bistro",
    "bronco",
    "burrito",
    "canto",
    "casino",
    "cello",
    "combo",
    "commando",
    "concerto",
    "credo",
    "demo",
    "dingo",
    "disco",
    "ditto",
    "dynamo",
    "ego",
    "euro",
    "fiasco",
    "gecko",
    "ghetto",
    "gizmo",
    "gusto",
    "hippo",
    "inferno",
    "jumbo",
    "kilo",
    "kimono",
    "lasso",
    "libido",
    "limo",
    "lingo",
    "logo",
    "macro",
    "maestro",
    "magneto",
    "manifesto",
    "memo",
    "metro",
    "micro",
    "motto",
    "nacho",
    "photo",
    "piano",
    "pimento",
    "placebo",
    "poncho",
    "pro",
    "psycho",
    "quarto",
    "rhino",
    "silo",
    "solo",
    "stiletto",
    "taco",
    "tango",
    "torso",
    "tuxedo",
    "typo",
    "zero",
];

/// Singulars ending in "-oe".
pub(crate) const OE_WORDS: &[&str] = &[
    "aloe",
    "canoe",
    "doe",
    "felloe",
    "floe",
    "foe",
    "hoe",
    "horseshoe",
    "mistletoe",
    "oboe",
    "roe",
    "shoe",
    "sloe",
    "snowshoe",
    "throe",
    "tiptoe",
    "toe",
    "woe",
];

/// Singulars ending in "-ie", which would otherwise come back as "-y".
pub(crate) const IE_WORDS: &[&str] = &[
    "auntie",
    "beanie",
    "birdie",
    "boogie",
    "bootie",
    "brownie",
    "budgie",
    "calorie",
    "collie",
    "cookie",
    "coterie",
    "cutie",
    "eyrie",
    "freebie",
    "genie",
    "goalie",
    "groupie",
    "hippie",
    "hoodie",
    "junkie",
    "laddie",
    "lassie",
    "lie",
    "magpie",
    "menagerie",
    "movie",
    "necktie",
    "newbie",
    "pie",
    "pixie",
    "prairie",
    "quickie",
    "reverie",
    "rookie",
    "selfie",
    "smoothie",
    "sortie",
    "sweetie",
    "talkie",
    "tie",
    "veggie",
    "yuppie",
    "zombie",
];

/// Singulars ending in "-use", so that "houses" is not taken for "hous" +
/// "es" the way "buses" is "bus" + "es".
pub(crate) const USE_ENDINGS: &[&str] = &[
    "blouse", "cause", "clause", "excuse", "house", "pause", "refuse", "spouse",
];

pub(crate) const USE_WORDS: &[&str] = &[
    "abuse", "disuse", "fuse", "misuse", "muse", "overuse", "reuse", "ruse", "use",
];

/// Singulars ending in "-u", which pluralize with a plain "s".
pub(crate) const U_WORDS: &[&str] = &[
    "bayou", "emu", "gnu", "guru", "haiku", "kudzu", "menu", "snafu", "sudoku", "tabu",
    "tiramisu", "tofu", "tutu", "zebu",
];

/// Singulars ending in "-s" that pluralize with "-es" and must not lose
/// their final "s" when singularized.
pub(crate) const S_ES_WORDS: &[&str] = &[
    "alias",
    "atlas",
    "bias",
    "biogas",
    "canvas",
    "chaos",
    "christmas",
    "clitoris",
    "cosmos",
    "dermis",
    "epidermis",
    "ethos",
    "gas",
    "glottis",
    "iris",
    "lens",
    "mantis",
    "metropolis",
    "pancreas",
    "pathos",
    "pelvis",
    "penis",
    "rhinoceros",
    "tennis",
    "thermos",
    "trellis",
    "yes",
];

/// Greek "-sis" singulars, for turning "-ses" back into "-sis".
pub(crate) const SIS_WORDS: &[&str] = &[
    "analysis",
    "antithesis",
    "apotheosis",
    "catalysis",
    "diagnosis",
    "dialysis",
    "ellipsis",
    "emphasis",
    "exegesis",
    "genesis",
    "hydrolysis",
    "hypnosis",
    "hypothesis",
    "metamorphosis",
    "mimesis",
    "nemesis",
    "neurosis",
    "osmosis",
    "paralysis",
    "parenthesis",
    "prognosis",
    "prosthesis",
    "psychosis",
    "sclerosis",
    "symbiosis",
    "synopsis",
    "synthesis",
    "thesis",
    "thrombosis",
    "tuberculosis",
];

/// "-man" words that are not compounds of "man".
pub(crate) const MAN_MANS_ENDINGS: &[&str] = &[
    "caiman", "cayman", "desman", "doberman", "dolman", "german", "human", "ottoman", "roman",
    "shaman", "talisman", "walkman",
];

/// Singulars ending in "-men".
pub(crate) const MEN_WORDS: &[&str] = &[
    "abdomen", "acumen", "albumen", "amen", "bitumen", "cerumen", "dolmen", "foramen", "germen",
    "hymen", "lumen", "omen", "ramen", "regimen", "rumen", "semen", "specimen", "stamen",
    "tegmen", "yemen",
];

pub(crate) const LOUSE_ENDINGS: &[&str] = &["louse", "mouse"];

//! Built-in lexicon data
//!
//! Entry order is the tie-break for free-text scans: when an utterance
//! mentions two values of the same kind, the entry listed first wins.
//!
//! `scan` forms are looked for inside free text and also resolve exact
//! values. `exact` forms only resolve whole values (a form field saying "M",
//! a state typed as "UP") because they are too short or too common to be
//! searched for inside a sentence.

use super::RegionType;

/// Static description of one canonical value
#[derive(Debug, Clone, Copy)]
pub struct EntryDef {
    pub canonical: &'static str,
    pub label_en: &'static str,
    pub label_hi: &'static str,
    pub scan: &'static [&'static str],
    pub exact: &'static [&'static str],
    pub region: Option<RegionType>,
}

const fn entry(
    canonical: &'static str,
    label_en: &'static str,
    label_hi: &'static str,
    scan: &'static [&'static str],
    exact: &'static [&'static str],
) -> EntryDef {
    EntryDef {
        canonical,
        label_en,
        label_hi,
        scan,
        exact,
        region: None,
    }
}

const fn state(
    canonical: &'static str,
    label_en: &'static str,
    label_hi: &'static str,
    scan: &'static [&'static str],
    exact: &'static [&'static str],
) -> EntryDef {
    EntryDef {
        canonical,
        label_en,
        label_hi,
        scan,
        exact,
        region: Some(RegionType::State),
    }
}

const fn union_territory(
    canonical: &'static str,
    label_en: &'static str,
    label_hi: &'static str,
    scan: &'static [&'static str],
    exact: &'static [&'static str],
) -> EntryDef {
    EntryDef {
        canonical,
        label_en,
        label_hi,
        scan,
        exact,
        region: Some(RegionType::UnionTerritory),
    }
}

pub const GENDERS: &[EntryDef] = &[
    entry(
        "male",
        "Male",
        "पुरुष",
        &[
            "male", "man", "men", "boy", "gentleman", "gentlemen", "purush", "पुरुष", "लड़का",
            "आदमी",
        ],
        &["m"],
    ),
    entry(
        "female",
        "Female",
        "महिला",
        &[
            "female", "woman", "women", "girl", "lady", "ladies", "mahila", "महिला", "लड़की", "औरत",
            "स्त्री",
        ],
        &["f"],
    ),
    entry(
        "other",
        "Other",
        "अन्य",
        &["transgender", "non-binary", "nonbinary", "ट्रांसजेंडर", "किन्नर"],
        &["other", "o", "अन्य", "third gender"],
    ),
];

pub const OCCUPATIONS: &[EntryDef] = &[
    entry(
        "farmer",
        "Farmer",
        "किसान",
        &["farmer", "farming", "kisan", "किसान", "कृषक", "खेती"],
        &["agriculture", "agriculturist"],
    ),
    entry(
        "student",
        "Student",
        "छात्र",
        &["student", "chhatra", "छात्र", "छात्रा", "विद्यार्थी"],
        &[],
    ),
    entry(
        "labour",
        "Worker",
        "मजदूर",
        &[
            "labour", "labor", "labourer", "laborer", "worker", "mazdoor", "majdoor", "मजदूर",
            "मज़दूर", "श्रमिक",
        ],
        &[],
    ),
    entry(
        "teacher",
        "Teacher",
        "शिक्षक",
        &["teacher", "shikshak", "शिक्षक", "अध्यापक", "शिक्षिका"],
        &[],
    ),
    entry(
        "business",
        "Business",
        "व्यापार",
        &[
            "business", "businessman", "shopkeeper", "trader", "vyapari", "व्यापार", "व्यापारी",
            "दुकानदार",
        ],
        &["self-employed", "self employed"],
    ),
    entry("other", "Other", "अन्य", &[], &["other", "अन्य"]),
];

pub const REGIONS: &[EntryDef] = &[
    state(
        "andhra pradesh",
        "Andhra Pradesh",
        "आंध्र प्रदेश",
        &["आंध्रप्रदेश"],
        &["ap"],
    ),
    state("arunachal pradesh", "Arunachal Pradesh", "अरुणाचल प्रदेश", &[], &[]),
    state("assam", "Assam", "असम", &[], &[]),
    state("bihar", "Bihar", "बिहार", &[], &[]),
    state(
        "chhattisgarh",
        "Chhattisgarh",
        "छत्तीसगढ़",
        &["chattisgarh", "chhatisgarh"],
        &["cg"],
    ),
    state("goa", "Goa", "गोवा", &[], &[]),
    state("gujarat", "Gujarat", "गुजरात", &[], &[]),
    state("haryana", "Haryana", "हरियाणा", &[], &[]),
    state("himachal pradesh", "Himachal Pradesh", "हिमाचल प्रदेश", &[], &["hp"]),
    state("jharkhand", "Jharkhand", "झारखंड", &["झारखण्ड"], &[]),
    state("karnataka", "Karnataka", "कर्नाटक", &[], &[]),
    state("kerala", "Kerala", "केरल", &["केरला"], &[]),
    state("madhya pradesh", "Madhya Pradesh", "मध्य प्रदेश", &["मध्यप्रदेश"], &["mp"]),
    state("maharashtra", "Maharashtra", "महाराष्ट्र", &[], &[]),
    state("manipur", "Manipur", "मणिपुर", &[], &[]),
    state("meghalaya", "Meghalaya", "मेघालय", &[], &[]),
    state("mizoram", "Mizoram", "मिजोरम", &["मिज़ोरम"], &[]),
    state("nagaland", "Nagaland", "नागालैंड", &[], &[]),
    state("odisha", "Odisha", "ओडिशा", &["orissa", "उड़ीसा", "ओड़िशा"], &[]),
    state("punjab", "Punjab", "पंजाब", &[], &[]),
    state("rajasthan", "Rajasthan", "राजस्थान", &[], &[]),
    state("sikkim", "Sikkim", "सिक्किम", &[], &[]),
    state("tamil nadu", "Tamil Nadu", "तमिलनाडु", &["तमिल नाडु"], &["tn"]),
    state("telangana", "Telangana", "तेलंगाना", &[], &[]),
    state("tripura", "Tripura", "त्रिपुरा", &[], &[]),
    state("uttar pradesh", "Uttar Pradesh", "उत्तर प्रदेश", &["उत्तरप्रदेश"], &["up"]),
    state(
        "uttarakhand",
        "Uttarakhand",
        "उत्तराखंड",
        &["uttaranchal", "उत्तरांचल", "उत्तराखण्ड"],
        &["uk"],
    ),
    state("west bengal", "West Bengal", "पश्चिम बंगाल", &["पश्चिमबंगाल"], &["wb"]),
    union_territory(
        "andaman and nicobar islands",
        "Andaman and Nicobar Islands",
        "अंडमान और निकोबार द्वीपसमूह",
        &["andaman and nicobar", "andaman", "nicobar", "अंडमान और निकोबार", "अंडमान", "निकोबार"],
        &[],
    ),
    union_territory("chandigarh", "Chandigarh", "चंडीगढ़", &[], &[]),
    union_territory(
        "dadra and nagar haveli and daman and diu",
        "Dadra and Nagar Haveli and Daman and Diu",
        "दादरा और नगर हवेली और दमन और दीव",
        &[
            "dadra and nagar haveli",
            "daman and diu",
            "dadra",
            "दादरा और नगर हवेली",
            "दमन और दीव",
        ],
        &["dnhdd"],
    ),
    union_territory(
        "delhi",
        "Delhi",
        "दिल्ली",
        &["new delhi", "nct of delhi", "national capital territory of delhi", "नई दिल्ली"],
        &["nct", "ncr"],
    ),
    union_territory(
        "jammu and kashmir",
        "Jammu and Kashmir",
        "जम्मू और कश्मीर",
        &["jammu kashmir", "kashmir", "जम्मू कश्मीर", "जम्मू-कश्मीर", "कश्मीर"],
        &["j&k", "j & k", "jk", "jammu & kashmir"],
    ),
    union_territory("ladakh", "Ladakh", "लद्दाख", &["लदाख"], &[]),
    union_territory("lakshadweep", "Lakshadweep", "लक्षद्वीप", &[], &[]),
    union_territory(
        "puducherry",
        "Puducherry",
        "पुडुचेरी",
        &["pondicherry", "पांडिचेरी", "पुदुच्चेरी"],
        &[],
    ),
];

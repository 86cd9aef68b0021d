//! Built-in watch list
//!
//! Used whenever a request carries no spreadsheet. The list is a process-wide
//! immutable constant; order matters because reports preserve term order.

/// Default terms, scanned in this order when the caller supplies none.
pub const DEFAULT_TERMS: &[&str] = &[
    "activism",
    "activists",
    "advocacy",
    "advocate",
    "advocates",
    "barrier",
    "barriers",
    "biased",
    "biased toward",
    "biases",
    "biases towards",
    "bipoc",
    "black and latinx",
    "community diversity",
    "community equity",
    "cultural differences",
    "cultural heritage",
    "culturally responsive",
    "disabilities",
    "disability",
    "discriminated",
    "discrimination",
    "discriminatory",
    "diverse backgrounds",
    "diverse communities",
    "diverse community",
    "diverse group",
    "diverse groups",
    "diversified",
    "diversify",
    "diversifying",
    "diversity and inclusion",
    "diversity equity",
    "enhance the diversity",
    "enhancing diversity",
    "equal opportunity",
    "equality",
    "equitable",
    "equity",
    "ethnicity",
    "excluded",
    "female",
    "females",
    "fostering inclusivity",
    "gender",
    "gender diversity",
    "genders",
    "hate speech",
    "hispanic minority",
    "historically",
    "lgbt",
    "implicit bias",
    "implicit biases",
    "inclusion",
    "inclusive",
    "inclusiveness",
    "inclusivity",
    "increase diversity",
    "increase the diversity",
    "indigenous community",
    "inequalities",
    "inequality",
    "inequitable",
    "inequities",
    "institutional",
    "marginalize",
    "marginalized",
    "minorities",
    "minority",
    "multicultural",
    "polarization",
    "political",
    "prejudice",
    "privileges",
    "promoting diversity",
    "race and ethnicity",
    "racial",
    "racial diversity",
    "racial inequality",
    "racial justice",
    "racially",
    "racism",
    "sense of belonging",
    "sexual preferences",
    "social justice",
    "sociocultural",
    "socioeconomic",
    "status",
    "stereotypes",
    "systemic",
    "trauma",
    "under appreciated",
    "under represented",
    "under served",
    "underrepresentation",
    "underrepresented",
    "underserved",
    "undervalued",
    "victim",
    "women",
    "women and underrepresented",
];

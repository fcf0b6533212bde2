//! MARC21 bibliographic field definitions.
//!
//! Every tag the linter knows about has one [`TagRule`]: whether the field
//! may repeat, what each indicator may hold, which subfield codes are
//! defined and which of those may repeat. Tags missing from the table are
//! not checked at all.
//!
//! # Examples
//!
//! ```
//! use marc_lint::rules::tag_rules::rule_for;
//!
//! let rule = rule_for("245").unwrap();
//! assert!(!rule.repeatable);
//! assert!(rule.allows_subfield('a'));
//! assert!(!rule.allows_subfield('z'));
//! assert!(rule.indicator2.is_valid('4'));
//! assert!(rule_for("999").is_none());
//! ```

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Allowed content of a single indicator position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorValidation {
    /// Indicator is undefined; blank is required
    Undefined,
    /// Indicator is not checked
    Any,
    /// Indicator must be one of the listed characters (space is blank)
    Values(&'static str),
    /// Indicator must be a digit within the range
    DigitRange {
        /// Minimum digit value (0-9)
        min: u8,
        /// Maximum digit value (0-9)
        max: u8,
    },
}

impl IndicatorValidation {
    /// Check if the given character is valid for this indicator.
    ///
    /// Blank may be written either as a space or as `#`.
    #[must_use]
    pub fn is_valid(&self, c: char) -> bool {
        let c = if c == '#' { ' ' } else { c };
        match self {
            IndicatorValidation::Undefined => c == ' ',
            IndicatorValidation::Any => true,
            IndicatorValidation::Values(values) => values.contains(c),
            IndicatorValidation::DigitRange { min, max } => c
                .to_digit(10)
                .is_some_and(|d| d >= u32::from(*min) && d <= u32::from(*max)),
        }
    }

    /// Allowed values as they appear in findings: `blank`, `0 or 1`,
    /// `blank, 0 or 1`, `0-9`.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            IndicatorValidation::Undefined => "blank".to_string(),
            IndicatorValidation::Any => "any value".to_string(),
            IndicatorValidation::DigitRange { min, max } => format!("{min}-{max}"),
            IndicatorValidation::Values(values) => {
                let names: Vec<String> = values
                    .chars()
                    .map(|c| if c == ' ' { "blank".to_string() } else { c.to_string() })
                    .collect();
                match names.split_last() {
                    Some((last, rest)) if !rest.is_empty() => {
                        format!("{} or {last}", rest.join(", "))
                    },
                    Some((last, _)) => last.clone(),
                    None => String::new(),
                }
            },
        }
    }
}

const BLANK: IndicatorValidation = IndicatorValidation::Undefined;
const ANY: IndicatorValidation = IndicatorValidation::Any;
/// Number of non-filing characters
const NONFILING: IndicatorValidation = IndicatorValidation::DigitRange { min: 0, max: 9 };

const fn one_of(values: &'static str) -> IndicatorValidation {
    IndicatorValidation::Values(values)
}

const R: bool = true;
const NR: bool = false;

/// Definition of one bibliographic field
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    /// Three-character tag
    pub tag: &'static str,
    /// Whether the field may occur more than once in a record
    pub repeatable: bool,
    /// Field name
    pub name: &'static str,
    /// First indicator
    pub indicator1: IndicatorValidation,
    /// Second indicator
    pub indicator2: IndicatorValidation,
    /// Defined subfield codes
    pub subfields: &'static str,
    /// Subfield codes that may occur more than once
    pub repeatable_subfields: &'static str,
}

impl TagRule {
    /// Whether `code` is a defined subfield of this field
    #[must_use]
    pub fn allows_subfield(&self, code: char) -> bool {
        self.subfields.contains(code)
    }

    /// Whether `code` may occur more than once in this field
    #[must_use]
    pub fn subfield_repeatable(&self, code: char) -> bool {
        self.repeatable_subfields.contains(code)
    }

    /// Validation for indicator 1 or 2
    #[must_use]
    pub fn indicator(&self, number: usize) -> IndicatorValidation {
        if number == 1 {
            self.indicator1
        } else {
            self.indicator2
        }
    }
}

const fn rule(
    tag: &'static str,
    repeatable: bool,
    name: &'static str,
    indicator1: IndicatorValidation,
    indicator2: IndicatorValidation,
    subfields: &'static str,
    repeatable_subfields: &'static str,
) -> TagRule {
    TagRule {
        tag,
        repeatable,
        name,
        indicator1,
        indicator2,
        subfields,
        repeatable_subfields,
    }
}

/// All known bibliographic fields, in tag order
#[rustfmt::skip]
pub const TAG_RULES: &[TagRule] = &[
    rule("001", NR, "Control number", ANY, ANY, "", ""),
    rule("003", NR, "Control number identifier", ANY, ANY, "", ""),
    rule("005", NR, "Date and time of latest transaction", ANY, ANY, "", ""),
    rule("006", R, "Fixed-length data elements, additional material characteristics", ANY, ANY, "", ""),
    rule("007", R, "Physical description fixed field", ANY, ANY, "", ""),
    rule("008", NR, "Fixed-length data elements", ANY, ANY, "", ""),
    rule("010", NR, "Library of Congress control number", BLANK, BLANK, "abz8", "bz8"),
    rule("013", R, "Patent control information", BLANK, BLANK, "abcdef68", "def8"),
    rule("015", R, "National bibliography number", BLANK, BLANK, "aqz268", "aqz8"),
    rule("016", R, "National bibliographic agency control number", one_of(" 7"), BLANK, "az28", "z8"),
    rule("017", R, "Copyright or legal deposit number", BLANK, one_of(" 8"), "abdiz268", "az8"),
    rule("018", NR, "Copyright article-fee code", BLANK, BLANK, "a68", "8"),
    rule("020", R, "International Standard Book Number", BLANK, BLANK, "acqz68", "qz8"),
    rule("022", R, "International Standard Serial Number", one_of(" 01"), BLANK, "almyz26801", "myz801"),
    rule("024", R, "Other standard identifier", one_of("0123478"), one_of(" 01"), "acdqz268", "qz8"),
    rule("025", R, "Overseas acquisition number", BLANK, BLANK, "a8", "a8"),
    rule("026", R, "Fingerprint identifier", BLANK, BLANK, "abcde2568", "ad58"),
    rule("027", R, "Standard technical report number", BLANK, BLANK, "aqz68", "qz8"),
    rule("028", R, "Publisher or distributor number", one_of("0123456"), one_of("0123"), "abq68", "q8"),
    rule("030", R, "CODEN designation", BLANK, BLANK, "az68", "z8"),
    rule("031", R, "Musical incipits information", BLANK, BLANK, "abcdegmnopqrstuyz268", "deqstuyz8"),
    rule("032", R, "Postal registration number", BLANK, BLANK, "ab68", "8"),
    rule("033", R, "Date/time and place of an event", one_of(" 012"), one_of(" 012"), "abcp012368", "abcp0128"),
    rule("034", R, "Coded cartographic mathematical data", one_of("013"), one_of(" 01"), "abcdefghjkmnprstxyz012368", "bchst0128"),
    rule("035", R, "System control number", BLANK, BLANK, "az68", "z8"),
    rule("036", NR, "Original study number for computer data files", BLANK, BLANK, "ab68", "8"),
    rule("037", R, "Source of acquisition", one_of(" 23"), BLANK, "abcfgn3568", "cfgn58"),
    rule("038", NR, "Record content licensor", BLANK, BLANK, "a68", "8"),
    rule("040", NR, "Cataloging source", BLANK, BLANK, "abcde68", "de8"),
    rule("041", R, "Language code", one_of(" 01"), one_of(" 7"), "abdefghijkmnpqrt2368", "abdefghijkmnpqrt28"),
    rule("042", NR, "Authentication code", BLANK, BLANK, "a", "a"),
    rule("043", NR, "Geographic area code", BLANK, BLANK, "abc01268", "abc0128"),
    rule("044", NR, "Country of publishing/producing entity code", BLANK, BLANK, "abc268", "abc28"),
    rule("045", NR, "Time period of content", one_of(" 012"), BLANK, "abc68", "abc8"),
    rule("046", R, "Special coded dates", one_of(" 123"), BLANK, "abcdejklmnopxz012368", "xz018"),
    rule("047", R, "Form of musical composition code", BLANK, one_of(" 7"), "a28", "a8"),
    rule("048", R, "Number of musical instruments or voices code", BLANK, one_of(" 7"), "ab28", "ab8"),
    rule("050", R, "Library of Congress call number", one_of(" 01"), one_of("04"), "ab01368", "a018"),
    rule("051", R, "Library of Congress copy, issue, offprint statement", BLANK, BLANK, "abc8", "8"),
    rule("052", R, "Geographic classification", one_of(" 17"), BLANK, "abd01268", "bd018"),
    rule("055", R, "Classification numbers assigned in Canada", one_of(" 01"), one_of("0123456789"), "ab0128", "018"),
    rule("060", R, "National Library of Medicine call number", one_of(" 01"), one_of("04"), "ab018", "a018"),
    rule("061", R, "National Library of Medicine copy statement", BLANK, BLANK, "abc8", "a8"),
    rule("066", NR, "Character sets present", BLANK, BLANK, "abc", "c"),
    rule("070", R, "National Agricultural Library call number", one_of("01"), BLANK, "ab018", "a018"),
    rule("071", R, "National Agricultural Library copy statement", BLANK, BLANK, "abc8", "a8"),
    rule("072", R, "Subject category code", BLANK, one_of("07"), "ax268", "x8"),
    rule("074", R, "GPO item number", BLANK, BLANK, "az8", "z8"),
    rule("080", R, "Universal Decimal Classification number", one_of(" 01"), BLANK, "abx01268", "x018"),
    rule("082", R, "Dewey Decimal Classification number", one_of("017"), one_of(" 04"), "abmq01268", "a018"),
    rule("083", R, "Additional Dewey Decimal Classification number", one_of("017"), BLANK, "acmqyz01268", "acy018"),
    rule("084", R, "Other classification number", BLANK, BLANK, "abq01268", "a018"),
    rule("085", R, "Synthesized classification number components", BLANK, BLANK, "abcfrstuvwyz0168", "abcfrstuvwyz018"),
    rule("086", R, "Government document classification number", one_of(" 01"), BLANK, "az01268", "z018"),
    rule("088", R, "Report number", BLANK, BLANK, "az68", "z8"),
    rule("100", NR, "Main entry--personal name", one_of("013"), BLANK, "abcdefgjklnpqtu012468", "cegjknp0148"),
    rule("110", NR, "Main entry--corporate name", one_of("012"), BLANK, "abcdefgklnptu012468", "bcdegknp0148"),
    rule("111", NR, "Main entry--meeting name", one_of("012"), BLANK, "acdefgjklnpqtu012468", "cegjknp0148"),
    rule("130", NR, "Main entry--uniform title", NONFILING, BLANK, "adfghklmnoprst012678", "dgkmnps018"),
    rule("210", R, "Abbreviated title", one_of("01"), one_of(" 0"), "ab268", "28"),
    rule("222", R, "Key title", BLANK, NONFILING, "ab68", "8"),
    rule("240", NR, "Uniform title", one_of("01"), NONFILING, "adfghklmnoprs012678", "dgkmnps018"),
    rule("242", R, "Translation of title by cataloging agency", one_of("01"), NONFILING, "abchnpy68", "np8"),
    rule("243", NR, "Collective uniform title", one_of("01"), NONFILING, "adfghklmnoprs68", "dgkmnps8"),
    rule("245", NR, "Title statement", one_of("01"), NONFILING, "abcfghknps68", "knp8"),
    rule("246", R, "Varying form of title", one_of("0123"), one_of(" 012345678"), "abfghinp568", "np8"),
    rule("247", R, "Former title", one_of("01"), one_of("01"), "abfghnpx68", "np8"),
    rule("250", R, "Edition statement", BLANK, BLANK, "ab368", "8"),
    rule("251", R, "Version information", BLANK, BLANK, "a012368", "a018"),
    rule("254", NR, "Musical presentation statement", BLANK, BLANK, "a68", "8"),
    rule("255", R, "Cartographic mathematical data", BLANK, BLANK, "abcdefg68", "8"),
    rule("256", NR, "Computer file characteristics", BLANK, BLANK, "a68", "8"),
    rule("257", R, "Country of producing entity", BLANK, BLANK, "a01268", "a018"),
    rule("258", R, "Philatelic issue data", BLANK, BLANK, "ab68", "8"),
    rule("260", R, "Publication, distribution, etc. (imprint)", one_of(" 23"), BLANK, "abcefg368", "abcefg8"),
    rule("263", NR, "Projected publication date", BLANK, BLANK, "a68", "8"),
    rule("264", R, "Production, publication, distribution, manufacture, and copyright notice", one_of(" 23"), one_of("01234"), "abc368", "abc8"),
    rule("270", R, "Address", one_of(" 12"), one_of(" 07"), "abcdefghijklmnpqrz468", "ajklmrz48"),
    rule("300", R, "Physical description", BLANK, BLANK, "abcefg368", "acfg8"),
    rule("306", NR, "Playing time", BLANK, BLANK, "a68", "a8"),
    rule("307", R, "Hours, etc.", one_of(" 8"), BLANK, "ab68", "8"),
    rule("310", NR, "Current publication frequency", BLANK, BLANK, "ab01268", "018"),
    rule("321", R, "Former publication frequency", BLANK, BLANK, "ab01268", "018"),
    rule("336", R, "Content type", BLANK, BLANK, "ab012368", "ab018"),
    rule("337", R, "Media type", BLANK, BLANK, "ab012368", "ab018"),
    rule("338", R, "Carrier type", BLANK, BLANK, "ab012368", "ab018"),
    rule("340", R, "Physical medium", BLANK, BLANK, "abcdefghijklmnopq012368", "abcdefghjklmnopq018"),
    rule("342", R, "Geospatial reference data", one_of("01"), one_of("012345678"), "abcdefghijklmnopqrstuvw268", "v8"),
    rule("343", R, "Planar coordinate data", BLANK, BLANK, "abcdefghi68", "8"),
    rule("344", R, "Sound characteristics", BLANK, BLANK, "abcdefghij012368", "abcdefghij018"),
    rule("345", R, "Moving image characteristics", BLANK, BLANK, "abcd012368", "abcd018"),
    rule("346", R, "Video characteristics", BLANK, BLANK, "ab012368", "ab018"),
    rule("347", R, "Digital file characteristics", BLANK, BLANK, "abcdef012368", "abcdef018"),
    rule("348", R, "Format of notated music", BLANK, BLANK, "abcd012368", "abcd018"),
    rule("351", R, "Organization and arrangement of materials", BLANK, BLANK, "abc368", "ab8"),
    rule("352", R, "Digital graphic representation", BLANK, BLANK, "abcdefgiq68", "b8"),
    rule("355", R, "Security classification control", one_of("0123458"), BLANK, "abcdefghj68", "bcj8"),
    rule("357", NR, "Originator dissemination control", BLANK, BLANK, "abcg68", "bcg8"),
    rule("362", R, "Dates of publication and/or sequential designation", one_of("01"), BLANK, "az68", "8"),
    rule("363", R, "Normalized date and sequential designation", one_of(" 01"), one_of(" 01"), "abcdefghijklmuvxz68", "xz8"),
    rule("365", R, "Trade price", BLANK, BLANK, "abcdefghijkm268", "8"),
    rule("366", R, "Trade availability information", BLANK, BLANK, "abcdefgjkm268", "8"),
    rule("370", R, "Associated place", BLANK, BLANK, "cfgistuv0123468", "cfgituv0148"),
    rule("377", R, "Associated language", BLANK, one_of(" 7"), "al012368", "al018"),
    rule("380", R, "Form of work", BLANK, BLANK, "a012368", "a018"),
    rule("381", R, "Other distinguishing characteristics of work or expression", BLANK, BLANK, "auv012368", "auv018"),
    rule("382", R, "Medium of performance", one_of(" 0123"), one_of(" 01"), "abdenprstv012368", "abdenpv018"),
    rule("383", R, "Numeric designation of musical work", BLANK, BLANK, "abcde2368", "abc8"),
    rule("384", R, "Key", one_of(" 01"), BLANK, "a368", "8"),
    rule("385", R, "Audience characteristics", BLANK, BLANK, "abmn012368", "ab018"),
    rule("386", R, "Creator/contributor characteristics", BLANK, BLANK, "abmn012368", "ab018"),
    rule("388", R, "Time period of creation", one_of(" 12"), BLANK, "a012368", "a018"),
    rule("490", R, "Series statement", one_of("01"), BLANK, "alvxyz368", "avxyz8"),
    rule("500", R, "General note", BLANK, BLANK, "a3568", "8"),
    rule("501", R, "With note", BLANK, BLANK, "a568", "8"),
    rule("502", R, "Dissertation note", BLANK, BLANK, "abcdgo68", "go8"),
    rule("504", R, "Bibliography, etc. note", BLANK, BLANK, "ab68", "8"),
    rule("505", R, "Formatted contents note", one_of("0128"), one_of(" 0"), "agrtu68", "grtu8"),
    rule("506", R, "Restrictions on access note", one_of(" 01"), BLANK, "abcdefgqu23568", "bcdefu8"),
    rule("507", NR, "Scale note for visual materials", BLANK, BLANK, "ab68", "8"),
    rule("508", R, "Creation/production credits note", BLANK, BLANK, "a68", "8"),
    rule("510", R, "Citation/references note", one_of("01234"), BLANK, "abcux368", "u8"),
    rule("511", R, "Participant or performer note", one_of("01"), BLANK, "a68", "8"),
    rule("513", R, "Type of report and period covered note", BLANK, BLANK, "ab68", "8"),
    rule("514", NR, "Data quality note", BLANK, BLANK, "abcdefghijkmuz68", "bcdfgijkmuz8"),
    rule("515", R, "Numbering peculiarities note", BLANK, BLANK, "a68", "8"),
    rule("516", R, "Type of computer file or data note", one_of(" 8"), BLANK, "a68", "8"),
    rule("518", R, "Date/time and place of an event note", BLANK, BLANK, "adop012368", "dop0128"),
    rule("520", R, "Summary, etc.", one_of(" 012348"), BLANK, "abcu2368", "u8"),
    rule("521", R, "Target audience note", one_of(" 012348"), BLANK, "ab368", "a8"),
    rule("522", R, "Geographic coverage note", one_of(" 8"), BLANK, "a68", "8"),
    rule("524", R, "Preferred citation of described materials note", one_of(" 8"), BLANK, "a2368", "8"),
    rule("525", R, "Supplement note", BLANK, BLANK, "a68", "8"),
    rule("526", R, "Study program information note", one_of("08"), BLANK, "abcdixz568", "cdxz8"),
    rule("530", R, "Additional physical form available note", BLANK, BLANK, "abcdu368", "u8"),
    rule("533", R, "Reproduction note", BLANK, BLANK, "abcdefmny35678", "bcfmn8"),
    rule("534", R, "Original version note", BLANK, BLANK, "abcefklmnoptxz368", "fknoxz8"),
    rule("535", R, "Location of originals/duplicates note", one_of("12"), BLANK, "abcdg368", "bcd8"),
    rule("536", R, "Funding information note", BLANK, BLANK, "abcdefgh68", "bcdefgh8"),
    rule("538", R, "System details note", BLANK, BLANK, "aiu3568", "u8"),
    rule("540", R, "Terms governing use and reproduction note", BLANK, BLANK, "abcdfgqu23568", "fgu8"),
    rule("541", R, "Immediate source of acquisition note", one_of(" 01"), BLANK, "abcdefhno3568", "no8"),
    rule("542", R, "Information relating to copyright status", one_of(" 01"), BLANK, "abcdefghijklmnopqrsu368", "dehnpsu8"),
    rule("544", R, "Location of other archival materials note", one_of(" 01"), BLANK, "abcden368", "abcden8"),
    rule("545", R, "Biographical or historical data", one_of(" 01"), BLANK, "abu68", "u8"),
    rule("546", R, "Language note", BLANK, BLANK, "ab368", "b8"),
    rule("547", R, "Former title complexity note", BLANK, BLANK, "a68", "8"),
    rule("550", R, "Issuing body note", BLANK, BLANK, "a68", "8"),
    rule("552", R, "Entity and attribute information note", BLANK, BLANK, "abcdefghijklmnopuz68", "opuz8"),
    rule("555", R, "Cumulative index/finding aids note", one_of(" 08"), BLANK, "abcdu368", "bu8"),
    rule("556", R, "Information about documentation note", one_of(" 8"), BLANK, "az68", "z8"),
    rule("561", R, "Ownership and custodial history", one_of(" 01"), BLANK, "au3568", "u8"),
    rule("562", R, "Copy and version identification note", BLANK, BLANK, "abcde3568", "abcde8"),
    rule("563", R, "Binding information", BLANK, BLANK, "au3568", "u8"),
    rule("565", R, "Case file characteristics note", one_of(" 08"), BLANK, "abcde368", "cde8"),
    rule("567", R, "Methodology note", one_of(" 8"), BLANK, "ab01268", "b018"),
    rule("580", R, "Linking entry complexity note", BLANK, BLANK, "a68", "8"),
    rule("581", R, "Publications about described materials note", one_of(" 8"), BLANK, "az368", "z8"),
    rule("583", R, "Action note", one_of(" 01"), BLANK, "abcdefhijklnouxz23568", "bcdefhiklnouxz8"),
    rule("584", R, "Accumulation and frequency of use note", BLANK, BLANK, "ab3568", "ab8"),
    rule("585", R, "Exhibitions note", BLANK, BLANK, "a3568", "8"),
    rule("586", R, "Awards note", one_of(" 8"), BLANK, "a368", "8"),
    rule("588", R, "Source of description note", one_of(" 01"), BLANK, "a568", "8"),
    rule("600", R, "Subject added entry--personal name", one_of("013"), one_of("01234567"), "abcdefghjklmnopqrstuvxyz0123468", "cegjkmnpvxyz0148"),
    rule("610", R, "Subject added entry--corporate name", one_of("012"), one_of("01234567"), "abcdefghklmnoprstuvxyz0123468", "bcdegkmnpvxyz0148"),
    rule("611", R, "Subject added entry--meeting name", one_of("012"), one_of("01234567"), "acdefghjklnpqstuvxyz0123468", "cegjknpvxyz0148"),
    rule("630", R, "Subject added entry--uniform title", NONFILING, one_of("01234567"), "adefghklmnoprstvxyz0123468", "degkmnpsvxyz0148"),
    rule("647", R, "Subject added entry--named event", BLANK, one_of("01234567"), "acdgvxyz012368", "cgvxyz018"),
    rule("648", R, "Subject added entry--chronological term", BLANK, one_of("01234567"), "avxyz012368", "vxyz018"),
    rule("650", R, "Subject added entry--topical term", one_of(" 012"), one_of("01234567"), "abcdegvxyz0123468", "egvxyz0148"),
    rule("651", R, "Subject added entry--geographic name", BLANK, one_of("01234567"), "aegvxyz0123468", "egvxyz0148"),
    rule("653", R, "Index term--uncontrolled", one_of(" 012"), one_of(" 0123456"), "a68", "a8"),
    rule("654", R, "Subject added entry--faceted topical terms", one_of(" 012"), BLANK, "abcevyz0123468", "abcevyz0148"),
    rule("655", R, "Index term--genre/form", one_of(" 0"), one_of("01234567"), "abcvxyz0123568", "bcvxyz018"),
    rule("656", R, "Index term--occupation", BLANK, one_of("7"), "akvxyz012368", "vxyz018"),
    rule("657", R, "Index term--function", BLANK, one_of("7"), "avxyz012368", "vxyz018"),
    rule("658", R, "Index term--curriculum objective", BLANK, BLANK, "abcd268", "b8"),
    rule("662", R, "Subject added entry--hierarchical place name", BLANK, BLANK, "abcdefgh012468", "acefgh0148"),
    rule("688", R, "Subject added entry--type of entity unspecified", BLANK, BLANK, "aegvxyz0123468", "egvxyz0148"),
    rule("700", R, "Added entry--personal name", one_of("013"), one_of(" 2"), "abcdefghijklmnopqrstux01234568", "cegijkmnp0148"),
    rule("710", R, "Added entry--corporate name", one_of("012"), one_of(" 2"), "abcdefghiklmnoprstux01234568", "bcdegikmnp0148"),
    rule("711", R, "Added entry--meeting name", one_of("012"), one_of(" 2"), "acdefghijklnpqstux01234568", "cegijknp0148"),
    rule("720", R, "Added entry--uncontrolled name", one_of(" 12"), BLANK, "ae468", "e48"),
    rule("730", R, "Added entry--uniform title", NONFILING, one_of(" 2"), "adfghiklmnoprstx01235678", "dgikmnps018"),
    rule("740", R, "Added entry--uncontrolled related/analytical title", NONFILING, one_of(" 2"), "ahnp568", "np8"),
    rule("751", R, "Added entry--geographic name", BLANK, BLANK, "aeg0123468", "eg0148"),
    rule("752", R, "Added entry--hierarchical place name", BLANK, BLANK, "abcdefgh012468", "acefgh0148"),
    rule("753", R, "System details access to computer files", BLANK, BLANK, "abc01268", "018"),
    rule("754", R, "Added entry--taxonomic identification", BLANK, BLANK, "acdxz01268", "acdxz018"),
    rule("758", R, "Resource identifier", BLANK, BLANK, "ai01234568", "i0148"),
    rule("760", R, "Main series entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("762", R, "Subseries entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("765", R, "Original language entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("767", R, "Translation entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("770", R, "Supplement/special issue entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("772", R, "Supplement parent entry", one_of("01"), one_of(" 08"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("773", R, "Host item entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("774", R, "Constituent unit entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("775", R, "Other edition entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("776", R, "Additional physical form entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("777", R, "Issued with entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("780", R, "Preceding entry", one_of("01"), one_of("01234567"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("785", R, "Succeeding entry", one_of("01"), one_of("012345678"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("786", R, "Data source entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("787", R, "Other relationship entry", one_of("01"), one_of(" 8"), "abcdghikmnopqrstuwxyz4678", "gknorwz48"),
    rule("800", R, "Series added entry--personal name", one_of("013"), BLANK, "abcdefghjklmnopqrstuvwx012345678", "cegjkmnpw01458"),
    rule("810", R, "Series added entry--corporate name", one_of("012"), BLANK, "abcdefghklmnoprstuvwx012345678", "bcdegkmnpw01458"),
    rule("811", R, "Series added entry--meeting name", one_of("012"), BLANK, "acdefghjklnpqstuvwx012345678", "cegjknpw01458"),
    rule("830", R, "Series added entry--uniform title", BLANK, NONFILING, "adfghklmnoprstvwx0135678", "dgkmnpw0158"),
    rule("850", R, "Holding institution", BLANK, BLANK, "a8", "a8"),
    rule("852", R, "Location", one_of(" 012345678"), one_of(" 012"), "abcdefghijklmnpqstuxz23678", "bcdefgikmsuxz"),
    rule("856", R, "Electronic location and access", one_of(" 012347"), one_of(" 01278"), "abcdfhijklmnopqrstuvwxyz23678", "abcdfimstuvwxyz8"),
    rule("880", R, "Alternate graphic representation", ANY, ANY, "", ""),
    rule("882", NR, "Replacement record information", BLANK, BLANK, "aiw68", "aiw8"),
    rule("883", R, "Metadata provenance", one_of(" 012"), BLANK, "acdquwx018", "uwx018"),
    rule("884", R, "Description conversion information", BLANK, BLANK, "agkqu", "u"),
    rule("887", R, "Non-MARC information field", BLANK, BLANK, "a2", ""),
];

lazy_static! {
    static ref RULES_BY_TAG: HashMap<&'static str, &'static TagRule> =
        TAG_RULES.iter().map(|rule| (rule.tag, rule)).collect();
}

/// Look up the rule for a tag
#[must_use]
pub fn rule_for(tag: &str) -> Option<&'static TagRule> {
    RULES_BY_TAG.get(tag).copied()
}

//! Pattern and gazetteer based entity recognition.
//!
//! Dates, money and percentages come from regular expressions. Capitalized
//! word runs are classified against three small lexicons: organization
//! suffixes, honorifics plus common given names, and a place gazetteer.
//! Runs that match none of them are dropped.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use peerlens_types::Entities;
use regex::Regex;
use rustc_hash::FxHashSet;

const MONTH: &str = r"(?:January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec)";

static DATES: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = [
        format!(r"\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?{MONTH}(?:,?\s+\d{{4}})?"),
        format!(r"{MONTH}\.?\s+(?:\d{{1,2}}(?:st|nd|rd|th)?(?:,?\s+\d{{4}})?|\d{{4}})"),
        r"(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)".to_string(),
        r"\d{4}-\d{2}-\d{2}".to_string(),
        r"\d{1,2}/\d{1,2}/\d{4}".to_string(),
    ];
    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))).expect("valid date regex")
});

static YEAR_AFTER_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[Ii]n\s+((?:19|20)\d{2})\b").expect("valid year regex"));

static MONEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[$€£]\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:million|billion|thousand|[kKmM]|bn)\b)?|(?i:\b\d[\d,]*(?:\.\d+)?\s+(?:dollars|euros|pounds|cents)\b)",
    )
    .expect("valid money regex")
});

static PERCENTAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?(?:\s?%|(?i:\s+percent\b))").expect("valid percent regex")
});

static CAPITALIZED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?P<title>(?:Dr|Mr|Mrs|Ms|Miss|Prof|Professor|Sir|Dame)\.?\s+)?(?P<name>[A-Z][\w'&-]*(?:\s+(?:of\s+|de\s+|&\s+)?[A-Z][\w'&-]*)*)",
    )
    .expect("valid capitalized-run regex")
});

static ORG_SUFFIXES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "Inc", "Corp", "Corporation", "Ltd", "LLC", "Co", "Company", "Group", "Holdings",
        "University", "College", "Institute", "School", "Academy", "Foundation", "Association",
        "Society", "Agency", "Bank", "Labs", "Council", "Committee", "Department", "Ministry",
        "Hospital", "Museum", "Press", "Times", "Journal",
    ]
    .into_iter()
    .collect()
});

static ORG_PREFIXES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    ["University", "Bank", "Department", "Ministry", "Institute", "Museum"]
        .into_iter()
        .collect()
});

static KNOWN_ORGS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "Google", "Microsoft", "Apple", "Amazon", "Meta", "Facebook", "IBM", "Intel", "Netflix",
        "Tesla", "Mozilla", "NASA", "UNESCO", "UNICEF", "NATO", "WHO", "FBI", "CIA", "MIT",
        "Harvard", "Stanford", "Oxford", "Cambridge", "GitHub", "OpenAI", "United Nations",
        "European Union", "World Bank",
    ]
    .into_iter()
    .collect()
});

static GIVEN_NAMES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "Aaron", "Adam", "Alan", "Albert", "Alex", "Alice", "Amanda", "Amy", "Andrew", "Anna",
        "Anne", "Anthony", "Barbara", "Ben", "Benjamin", "Betty", "Bill", "Bob", "Brian", "Carol",
        "Charles", "Chris", "Christopher", "Daniel", "David", "Deborah", "Diana", "Donald",
        "Edward", "Elizabeth", "Emily", "Emma", "Eric", "Frank", "George", "Grace", "Hannah",
        "Harry", "Helen", "Henry", "Jack", "Jacob", "James", "Jane", "Jason", "Jennifer",
        "Jessica", "John", "Joseph", "Joshua", "Julia", "Karen", "Kevin", "Laura", "Linda",
        "Lisa", "Maria", "Mark", "Mary", "Matthew", "Michael", "Nancy", "Nicholas", "Olivia",
        "Patricia", "Paul", "Peter", "Rachel", "Richard", "Robert", "Ryan", "Sarah", "Steven",
        "Susan", "Thomas", "Timothy", "William",
    ]
    .into_iter()
    .collect()
});

static PLACES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        // Countries and regions
        "Africa", "America", "Argentina", "Asia", "Australia", "Austria", "Belgium", "Brazil",
        "Canada", "Chile", "China", "Colombia", "Denmark", "Egypt", "England", "Europe",
        "Finland", "France", "Germany", "Greece", "India", "Indonesia", "Iran", "Ireland",
        "Israel", "Italy", "Japan", "Kenya", "Korea", "Mexico", "Netherlands", "New Zealand",
        "Nigeria", "Norway", "Pakistan", "Peru", "Poland", "Portugal", "Russia", "Scotland",
        "Singapore", "South Africa", "Spain", "Sweden", "Switzerland", "Turkey", "Ukraine",
        "United Kingdom", "United States", "Vietnam", "Wales",
        // Cities
        "Amsterdam", "Athens", "Bangkok", "Barcelona", "Beijing", "Berlin", "Boston", "Cairo",
        "Chicago", "Dublin", "Hong Kong", "Istanbul", "Lagos", "Lisbon", "London",
        "Los Angeles", "Madrid", "Melbourne", "Moscow", "Mumbai", "Nairobi", "New York",
        "Paris", "Prague", "Rome", "San Francisco", "Seattle", "Seoul", "Shanghai", "Sydney",
        "Tokyo", "Toronto", "Vienna", "Warsaw",
        // US states
        "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
        "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
        "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
        "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
        "New Hampshire", "New Jersey", "New Mexico", "North Carolina", "North Dakota", "Ohio",
        "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
        "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
        "Wisconsin", "Wyoming",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameClass {
    Person,
    Place,
    Organization,
}

fn classify(words: &[&str], titled: bool) -> Option<NameClass> {
    let (first, last) = (words.first()?, words.last()?);
    if !first.starts_with(|c: char| c.is_uppercase()) {
        return None;
    }
    let joined = words.join(" ");
    if ORG_SUFFIXES.contains(*last)
        || ORG_PREFIXES.contains(*first)
        || KNOWN_ORGS.contains(joined.as_str())
    {
        return Some(NameClass::Organization);
    }
    if titled || GIVEN_NAMES.contains(*first) {
        return Some(NameClass::Person);
    }
    if PLACES.contains(joined.as_str()) {
        return Some(NameClass::Place);
    }
    None
}

fn collect_matches(re: &Regex, text: &str, into: &mut BTreeSet<String>) {
    into.extend(re.find_iter(text).map(|m| m.as_str().trim().to_string()));
}

fn collect_names(text: &str, entities: &mut Entities) {
    for caps in CAPITALIZED_RUN.captures_iter(text) {
        let Some(name) = caps.name("name") else {
            continue;
        };
        let titled = caps.name("title").is_some();
        let words: Vec<&str> = name.as_str().split_whitespace().collect();

        // A title binds to the whole run; otherwise leading capitalized words
        // (sentence starts, "The") are peeled off until something matches.
        let starts = if titled { 0..1 } else { 0..words.len() };
        for start in starts {
            let span = &words[start..];
            let Some(class) = classify(span, titled) else {
                continue;
            };
            let entity = span.join(" ");
            match class {
                NameClass::Person => entities.people.insert(entity),
                NameClass::Place => entities.places.insert(entity),
                NameClass::Organization => entities.organizations.insert(entity),
            };
            break;
        }
    }
}

/// Recognize people, places, organizations, dates, money and percentages.
pub fn extract_entities(text: &str) -> Entities {
    let mut entities = Entities::default();

    collect_matches(&DATES, text, &mut entities.dates);
    entities.dates.extend(
        YEAR_AFTER_IN
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
    );
    collect_matches(&MONEY, text, &mut entities.money);
    collect_matches(&PERCENTAGES, text, &mut entities.percentages);
    collect_names(text, &mut entities);

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_initial_word_is_peeled_off() {
        let e = extract_entities("Yesterday John Smith flew to Paris.");
        assert!(e.people.contains("John Smith"));
        assert!(e.places.contains("Paris"));
        assert!(!e.people.contains("Yesterday John Smith"));
    }

    #[test]
    fn titled_name_is_a_person() {
        let e = extract_entities("We met Dr. Okafor after lunch.");
        assert!(e.people.contains("Okafor"));
    }

    #[test]
    fn day_month_date_is_not_split() {
        let e = extract_entities("The deadline is 3 March 2024.");
        assert_eq!(e.dates.iter().collect::<Vec<_>>(), vec!["3 March 2024"]);
    }

    #[test]
    fn unknown_capitalized_run_is_dropped() {
        let e = extract_entities("Zorblax arrived.");
        assert!(e.people.is_empty() && e.places.is_empty() && e.organizations.is_empty());
    }
}

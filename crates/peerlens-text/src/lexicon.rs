//! Word lists backing the prose analyzers.
//!
//! `AFINN` holds polarity valences in `-5..=5` taken from the AFINN-165
//! word list (common English subset). The remaining tables are small
//! closed-class sets.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

pub(crate) static AFINN: LazyLock<FxHashMap<&'static str, i32>> =
    LazyLock::new(|| AFINN_ENTRIES.iter().copied().collect());

pub(crate) static NEGATORS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "cannot", "cant", "can't", "dont", "don't", "don", "doesnt",
        "doesn't", "doesn", "didnt", "didn't", "didn", "isnt", "isn't", "isn", "wasnt", "wasn't",
        "wasn", "arent", "aren't", "aren", "wont", "won't", "non", "without",
    ]
    .into_iter()
    .collect()
});

pub(crate) static STOP_WORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them",
    ]
    .into_iter()
    .collect()
});

const AFINN_ENTRIES: &[(&str, i32)] = &[
    ("abandon", -2),
    ("abandoned", -2),
    ("abuse", -3),
    ("abused", -3),
    ("accept", 1),
    ("accepted", 1),
    ("accomplish", 2),
    ("accomplished", 2),
    ("accurate", 1),
    ("ache", -2),
    ("achievement", 2),
    ("admire", 3),
    ("admired", 3),
    ("adorable", 3),
    ("adore", 3),
    ("advantage", 2),
    ("afraid", -2),
    ("aggressive", -2),
    ("agree", 1),
    ("agreed", 1),
    ("alarm", -2),
    ("alarmed", -2),
    ("alone", -2),
    ("amazed", 2),
    ("amazing", 4),
    ("anger", -3),
    ("angry", -3),
    ("annoy", -2),
    ("annoyed", -2),
    ("annoying", -2),
    ("anxious", -2),
    ("apologize", -1),
    ("appreciate", 2),
    ("appreciated", 2),
    ("approval", 2),
    ("approve", 2),
    ("approved", 2),
    ("argue", -2),
    ("argument", -2),
    ("arrogant", -2),
    ("ashamed", -2),
    ("attack", -1),
    ("attractive", 2),
    ("avoid", -1),
    ("awesome", 4),
    ("awful", -3),
    ("awkward", -2),
    ("bad", -3),
    ("badly", -3),
    ("beautiful", 3),
    ("benefit", 2),
    ("benefits", 2),
    ("best", 3),
    ("better", 2),
    ("bitter", -2),
    ("blame", -2),
    ("blessed", 3),
    ("bored", -2),
    ("boring", -3),
    ("brave", 2),
    ("breakthrough", 3),
    ("brilliant", 4),
    ("broken", -1),
    ("bug", -2),
    ("bugs", -2),
    ("calm", 2),
    ("care", 2),
    ("careful", 2),
    ("careless", -2),
    ("celebrate", 3),
    ("chaos", -2),
    ("cheer", 2),
    ("cheerful", 2),
    ("clean", 2),
    ("clear", 1),
    ("clever", 2),
    ("comfort", 2),
    ("comfortable", 2),
    ("commend", 2),
    ("confident", 2),
    ("confuse", -2),
    ("confused", -2),
    ("confusing", -2),
    ("congratulations", 2),
    ("cool", 1),
    ("courage", 2),
    ("crap", -3),
    ("crash", -2),
    ("crazy", -2),
    ("creative", 2),
    ("crisis", -3),
    ("critical", -2),
    ("criticism", -2),
    ("cruel", -3),
    ("cry", -1),
    ("damage", -3),
    ("damaged", -3),
    ("danger", -2),
    ("dangerous", -2),
    ("dead", -3),
    ("death", -2),
    ("defeat", -2),
    ("defect", -3),
    ("delay", -1),
    ("delayed", -1),
    ("delight", 3),
    ("delighted", 3),
    ("depressed", -2),
    ("desire", 1),
    ("despair", -3),
    ("destroy", -3),
    ("destroyed", -3),
    ("difficult", -1),
    ("dirty", -2),
    ("disappoint", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disappointment", -2),
    ("disaster", -2),
    ("disgusting", -3),
    ("dislike", -2),
    ("dull", -2),
    ("eager", 2),
    ("ease", 2),
    ("easy", 1),
    ("effective", 2),
    ("efficient", 2),
    ("elegant", 2),
    ("embarrassed", -2),
    ("encourage", 2),
    ("encouraged", 2),
    ("energetic", 2),
    ("engage", 1),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("enthusiastic", 3),
    ("error", -2),
    ("errors", -2),
    ("excellence", 3),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("exhausted", -2),
    ("fabulous", 4),
    ("fail", -2),
    ("failed", -2),
    ("failing", -2),
    ("fails", -2),
    ("failure", -2),
    ("fair", 2),
    ("fake", -3),
    ("fantastic", 4),
    ("fascinating", 3),
    ("fault", -2),
    ("favorite", 2),
    ("fear", -2),
    ("fine", 2),
    ("flawed", -2),
    ("fool", -2),
    ("foolish", -2),
    ("fortunate", 2),
    ("free", 1),
    ("friendly", 2),
    ("frustrated", -2),
    ("frustrating", -2),
    ("fun", 4),
    ("funny", 4),
    ("generous", 2),
    ("genius", 3),
    ("glad", 3),
    ("gloomy", -2),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("greatest", 3),
    ("grief", -2),
    ("happiness", 3),
    ("happy", 3),
    ("harm", -2),
    ("harmful", -2),
    ("hate", -3),
    ("hated", -3),
    ("hates", -3),
    ("hatred", -3),
    ("healthy", 2),
    ("help", 2),
    ("helped", 2),
    ("helpful", 2),
    ("helping", 2),
    ("helpless", -2),
    ("hope", 2),
    ("hopeful", 2),
    ("hopeless", -2),
    ("horrible", -3),
    ("hurt", -2),
    ("ignore", -1),
    ("ignored", -2),
    ("ill", -2),
    ("important", 2),
    ("impress", 3),
    ("impressed", 3),
    ("impressive", 3),
    ("improve", 2),
    ("improved", 2),
    ("improvement", 2),
    ("inadequate", -2),
    ("incompetent", -2),
    ("incorrect", -1),
    ("ineffective", -2),
    ("innovative", 2),
    ("insecure", -2),
    ("inspiring", 3),
    ("intelligent", 2),
    ("interest", 1),
    ("interested", 2),
    ("interesting", 2),
    ("irritating", -3),
    ("joy", 3),
    ("joyful", 3),
    ("kind", 2),
    ("lack", -2),
    ("lame", -2),
    ("laugh", 1),
    ("lazy", -1),
    ("like", 2),
    ("liked", 2),
    ("lose", -3),
    ("loss", -3),
    ("lost", -3),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("loves", 3),
    ("lucky", 3),
    ("mad", -3),
    ("masterpiece", 4),
    ("mess", -2),
    ("messy", -2),
    ("miserable", -3),
    ("miss", -2),
    ("missing", -2),
    ("mistake", -2),
    ("mistakes", -2),
    ("motivated", 2),
    ("nasty", -3),
    ("neat", 2),
    ("negative", -2),
    ("neglect", -2),
    ("nervous", -2),
    ("nice", 3),
    ("nightmare", -3),
    ("noisy", -1),
    ("ok", 2),
    ("okay", 2),
    ("optimistic", 2),
    ("outstanding", 5),
    ("pain", -2),
    ("painful", -2),
    ("panic", -3),
    ("pathetic", -2),
    ("peace", 2),
    ("perfect", 3),
    ("perfectly", 3),
    ("pleasant", 3),
    ("please", 1),
    ("pleased", 3),
    ("pointless", -2),
    ("poor", -2),
    ("poorly", -2),
    ("popular", 3),
    ("positive", 2),
    ("powerful", 2),
    ("praise", 3),
    ("pretty", 1),
    ("problem", -2),
    ("problems", -2),
    ("progress", 2),
    ("promising", 3),
    ("proud", 2),
    ("rage", -2),
    ("recommend", 2),
    ("recommended", 2),
    ("refuse", -2),
    ("regret", -2),
    ("reject", -1),
    ("rejected", -1),
    ("relaxed", 2),
    ("reliable", 2),
    ("relief", 1),
    ("remarkable", 2),
    ("ridiculous", -3),
    ("risk", -2),
    ("robust", 2),
    ("rude", -2),
    ("ruin", -2),
    ("sad", -2),
    ("safe", 1),
    ("satisfied", 2),
    ("scared", -2),
    ("secure", 2),
    ("shame", -2),
    ("shocked", -2),
    ("sick", -2),
    ("silly", -1),
    ("sloppy", -2),
    ("smart", 1),
    ("smile", 2),
    ("solid", 2),
    ("sorry", -1),
    ("stress", -1),
    ("stressed", -2),
    ("strong", 2),
    ("struggle", -2),
    ("stuck", -2),
    ("stupid", -2),
    ("success", 2),
    ("successful", 3),
    ("suffer", -2),
    ("superb", 5),
    ("support", 2),
    ("supportive", 2),
    ("sweet", 2),
    ("terrible", -3),
    ("terrific", 4),
    ("thank", 2),
    ("thanks", 2),
    ("thorough", 2),
    ("threat", -2),
    ("tired", -2),
    ("tragic", -2),
    ("trouble", -2),
    ("true", 2),
    ("trust", 1),
    ("ugly", -3),
    ("unclear", -1),
    ("unfair", -2),
    ("unhappy", -2),
    ("unsure", -1),
    ("upset", -2),
    ("useful", 2),
    ("useless", -2),
    ("valuable", 2),
    ("victory", 3),
    ("vulnerable", -2),
    ("warm", 1),
    ("waste", -1),
    ("weak", -2),
    ("weakness", -2),
    ("welcome", 2),
    ("win", 4),
    ("wise", 2),
    ("wonderful", 4),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("worthless", -2),
    ("wow", 4),
    ("wrong", -2),
    ("yes", 1),
];

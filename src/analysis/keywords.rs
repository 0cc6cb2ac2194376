//! Application keyword allow-lists.
//!
//! Application content is free text typed into the timekeeping system, often
//! several requests for one day separated by commas or line breaks, each with
//! an approval status in brackets. A category matches only when one of those
//! request entries is *exactly* one of its phrases. Substring containment is
//! never used: "電車の遅延はありません" (no train delay today) and
//! "遅延証明書は後日提出" (delay certificate to follow) must not count as a
//! train-delay application.

/// Characters separating application entries.
const ENTRY_DELIMITERS: &[char] = &[
    '\n', '\r', '\t', ',', '、', '，', '/', '／', ';', '；', '|', '｜', ' ', '\u{3000}',
];

/// Bracket pairs enclosing annotations such as approval status.
const BRACKETS: &[(char, char)] = &[
    ('(', ')'),
    ('（', '）'),
    ('[', ']'),
    ('［', '］'),
    ('【', '】'),
    ('<', '>'),
    ('＜', '＞'),
];

/// An immutable set of exact application phrases for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseSet {
    name: &'static str,
    phrases: &'static [&'static str],
}

impl PhraseSet {
    /// Creates a named phrase set.
    pub const fn new(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self { name, phrases }
    }

    /// Category name, used in log and violation details.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The exact phrases of this category.
    pub fn phrases(&self) -> &'static [&'static str] {
        self.phrases
    }

    /// Returns true if `entry` is exactly one of the phrases.
    pub fn contains(&self, entry: &str) -> bool {
        self.phrases.iter().any(|phrase| *phrase == entry)
    }

    /// Returns true if any application entry in `text` is one of the phrases.
    ///
    /// ```
    /// use attendance_engine::analysis::keywords::TRAIN_DELAY;
    ///
    /// assert!(TRAIN_DELAY.matches("電車遅延(承認済)"));
    /// assert!(!TRAIN_DELAY.matches("電車の遅延はありません"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        application_entries(text)
            .iter()
            .any(|entry| self.contains(entry))
    }
}

/// Shared "phrase present" predicate over several categories.
pub fn phrase_present(text: &str, sets: &[&PhraseSet]) -> bool {
    application_entries(text)
        .iter()
        .any(|entry| sets.iter().any(|set| set.contains(entry)))
}

/// Splits application content into normalized request entries.
///
/// Bracketed annotations are removed (an unclosed bracket drops the rest of
/// the text), then the remainder is split at list delimiters and trimmed.
///
/// ```
/// use attendance_engine::analysis::keywords::application_entries;
///
/// let entries = application_entries("遅刻申請【承認済】、半休(午後)");
/// assert_eq!(entries, vec!["遅刻申請", "半休"]);
/// ```
pub fn application_entries(text: &str) -> Vec<String> {
    strip_annotations(text)
        .split(ENTRY_DELIMITERS)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_annotations(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut open: Vec<char> = Vec::new();

    for c in text.chars() {
        if let Some(&(_, close)) = BRACKETS.iter().find(|(o, _)| *o == c) {
            if open.is_empty() {
                stripped.push(' ');
            }
            open.push(close);
        } else if open.last() == Some(&c) {
            open.pop();
        } else if open.is_empty() {
            stripped.push(c);
        }
    }

    stripped
}

/// Returns true if `text` contains any of the markers.
///
/// Used only for half-day morning/afternoon disambiguation, where the marker
/// usually sits inside the bracketed annotation.
pub fn contains_marker(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(*marker))
}

/// Late-arrival applications.
pub const LATE_ARRIVAL: PhraseSet = PhraseSet::new(
    "late_arrival",
    &["遅刻", "遅刻申請", "遅刻届", "遅刻連絡"],
);

/// Public-transport delay applications.
pub const TRAIN_DELAY: PhraseSet = PhraseSet::new(
    "train_delay",
    &[
        "遅延",
        "遅延申請",
        "遅延届",
        "電車遅延",
        "電車遅延申請",
        "交通遅延",
        "交通機関遅延",
        "遅延証明提出済",
    ],
);

/// Flex-time and staggered-start applications.
pub const FLEX_TIME: PhraseSet = PhraseSet::new(
    "flex_time",
    &["フレックス", "フレックスタイム", "フレックス申請", "時差出勤", "時差出勤申請"],
);

/// Half-day leave applications.
pub const HALF_DAY_LEAVE: PhraseSet = PhraseSet::new(
    "half_day_leave",
    &[
        "半休",
        "半日休暇",
        "半日有給",
        "半日有休",
        "午前半休",
        "午後半休",
        "AM半休",
        "PM半休",
        "午前休",
        "午後休",
        "半日代休",
        "半日振休",
    ],
);

/// Full-day leave applications, including absence and post-night-shift rest.
pub const FULL_DAY_LEAVE: PhraseSet = PhraseSet::new(
    "full_day_leave",
    &[
        "有給休暇",
        "有給",
        "有休",
        "年休",
        "年次有給休暇",
        "全休",
        "欠勤",
        "特別休暇",
        "慶弔休暇",
        "生理休暇",
        "介護休暇",
        "看護休暇",
        "子の看護休暇",
        "明け休",
        "夜勤明け",
        "夜勤明け休",
        "代休",
        "振替休日",
        "振休",
        "公休",
        "産前産後休暇",
        "育児休業",
        "休職",
    ],
);

/// Early-leave applications.
pub const EARLY_LEAVE: PhraseSet =
    PhraseSet::new("early_leave", &["早退", "早退申請", "早退届"]);

/// Early-start applications.
pub const EARLY_START: PhraseSet = PhraseSet::new(
    "early_start",
    &[
        "早出",
        "早出申請",
        "早出残業",
        "早出残業申請",
        "早朝出勤",
        "早朝出勤申請",
        "始業前勤務申請",
    ],
);

/// Break-time correction applications.
pub const BREAK_CORRECTION: PhraseSet = PhraseSet::new(
    "break_correction",
    &["休憩時間修正", "休憩時間修正申請", "休憩修正", "休憩修正申請"],
);

/// Hourly paid-leave applications.
pub const HOURLY_LEAVE: PhraseSet = PhraseSet::new(
    "hourly_leave",
    &["時間有休", "時間有給", "時間単位有給", "時間単位有給休暇", "時間休"],
);

/// Substitute-work applications (holiday worked as an ordinary day).
pub const SUBSTITUTE_WORK: PhraseSet = PhraseSet::new(
    "substitute_work",
    &["振替出勤", "振出", "休日振替出勤", "振替勤務"],
);

/// Application types whose remarks must explain the circumstances.
pub const REMARKS_REQUIRED: PhraseSet = PhraseSet::new(
    "remarks_required",
    &[
        "直行",
        "直帰",
        "直行直帰",
        "直行・直帰",
        "遅延",
        "遅延申請",
        "電車遅延",
        "打刻修正",
        "打刻修正申請",
        "打刻忘れ",
    ],
);

/// Morning markers for half-day disambiguation.
pub const MORNING_MARKERS: &[&str] = &["午前", "AM", "ＡＭ", "前半"];

/// Afternoon markers for half-day disambiguation.
pub const AFTERNOON_MARKERS: &[&str] = &["午後", "PM", "ＰＭ", "後半"];

//! Output language for labels, notes and error envelopes.

use crate::types::{BloodRelation, Rank};

/// Language of the human-readable parts of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Japanese, the language of the statute being modeled.
    #[default]
    Ja,
    En,
}

const IMPORTANT_NOTES_JA: &[&str] = &[
    "相続放棄の熟慮期間は、相続の開始を知った時から3ヶ月です。",
    "ただし、多額の債務など自身の利害に重大な影響を及ぼす事実を後から知った場合、その時から3ヶ月となる場合もあります。",
    "再転相続の場合、熟慮期間の起算点は再転相続人が自身のために相続が開始した事実を知った時です。",
    "このツールは参考情報を提供するものであり、法的助言ではありません。実際の相続では専門家にご相談ください。",
];

const IMPORTANT_NOTES_EN: &[&str] = &[
    "The period for deciding whether to renounce an inheritance is three months from the time the heir learns that succession has commenced.",
    "If an heir later learns of facts that seriously affect their interests, such as substantial debts, the three months may run from that time instead.",
    "In a successive inheritance, the period starts when the successive heir learns that succession has commenced for them.",
    "This tool provides reference information only and is not legal advice. Consult a professional for an actual inheritance.",
];

impl Locale {
    pub fn rank_label(self, rank: Rank) -> &'static str {
        match (self, rank) {
            (Locale::Ja, Rank::Spouse) => "配偶者",
            (Locale::Ja, Rank::First) => "第1順位（子）",
            (Locale::Ja, Rank::Second) => "第2順位（直系尊属）",
            (Locale::Ja, Rank::Third) => "第3順位（兄弟姉妹）",
            (Locale::En, Rank::Spouse) => "Spouse",
            (Locale::En, Rank::First) => "First rank (children)",
            (Locale::En, Rank::Second) => "Second rank (lineal ascendants)",
            (Locale::En, Rank::Third) => "Third rank (siblings)",
        }
    }

    pub fn blood_relation_label(self, relation: BloodRelation) -> &'static str {
        match (self, relation) {
            (Locale::Ja, BloodRelation::Full) => "全血",
            (Locale::Ja, BloodRelation::Half) => "半血",
            (Locale::En, BloodRelation::Full) => "full blood",
            (Locale::En, BloodRelation::Half) => "half blood",
        }
    }

    /// Advisory placed at the start of the note when simultaneous death is presumed.
    pub fn simultaneous_death_note(self) -> &'static str {
        match self {
            Locale::Ja => {
                "【注意】同時死亡の推定が適用されています（民法32条の2）。\n\
                 同時死亡者間では互いに相続は発生しません。\n\
                 ただし、同時死亡した相続人に子がいれば、代襲相続は発生します。\n\n"
            }
            Locale::En => {
                "[Notice] The presumption of simultaneous death applies (Civil Code Art. 32-2).\n\
                 No succession occurs between persons presumed to have died simultaneously.\n\
                 However, if a simultaneously deceased heir has children, representation applies.\n\n"
            }
        }
    }

    pub fn no_heirs_note(self) -> &'static str {
        match self {
            Locale::Ja => "法定相続人はいません。",
            Locale::En => "There are no legal heirs.",
        }
    }

    pub fn escheat_summary(self) -> &'static str {
        match self {
            Locale::Ja => "法定相続人が存在しないため、相続財産は最終的に国庫に帰属します。",
            Locale::En => {
                "Because there are no legal heirs, the estate ultimately escheats to the state."
            }
        }
    }

    pub fn important_notes(self) -> &'static [&'static str] {
        match self {
            Locale::Ja => IMPORTANT_NOTES_JA,
            Locale::En => IMPORTANT_NOTES_EN,
        }
    }

    pub fn input_error_kind(self) -> &'static str {
        match self {
            Locale::Ja => "入力データエラー",
            Locale::En => "input error",
        }
    }

    pub fn input_error_suggestion(self) -> &'static str {
        match self {
            Locale::Ja => "入力データの形式を確認してください。",
            Locale::En => "Check the format of the input record.",
        }
    }

    pub fn calculation_error_kind(self) -> &'static str {
        match self {
            Locale::Ja => "計算エラー",
            Locale::En => "calculation error",
        }
    }

    pub fn calculation_error_suggestion(self) -> &'static str {
        match self {
            Locale::Ja => "予期しないエラーが発生しました。入力データを確認してください。",
            Locale::En => "An unexpected error occurred. Check the input record.",
        }
    }
}

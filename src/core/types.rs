use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTier {
    Conservative,
    Moderate,
    Aggressive,
}

impl ProfileTier {
    pub const ALL: [ProfileTier; 3] = [
        ProfileTier::Conservative,
        ProfileTier::Moderate,
        ProfileTier::Aggressive,
    ];

    /// Inclusive upper score bound. Aggressive is open-ended in practice; see
    /// `classify`.
    pub fn max_score(self) -> i32 {
        match self {
            ProfileTier::Conservative => 10,
            ProfileTier::Moderate => 15,
            ProfileTier::Aggressive => 20,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ProfileTier::Conservative => "CONSERVADOR",
            ProfileTier::Moderate => "MODERADO",
            ProfileTier::Aggressive => "AGRESSIVO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileTier::Conservative => "CONSERVADOR 🐢",
            ProfileTier::Moderate => "MODERADO ⚖️",
            ProfileTier::Aggressive => "AGRESSIVO (OU ARROJADO) 🚀",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ProfileTier::Conservative => {
                "Busca segurança e previsibilidade, preferindo produtos de baixo risco."
            }
            ProfileTier::Moderate => {
                "Tolera um risco moderado em busca de retornos um pouco maiores."
            }
            ProfileTier::Aggressive => {
                "Busca altos retornos, aceitando alta volatilidade e risco em Renda Variável."
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Objective {
    #[serde(rename = "objetivo_renda_mensal")]
    MonthlyIncome,
    #[serde(rename = "objetivo_seguranca")]
    Safety,
    #[serde(rename = "objetivo_crescimento")]
    Growth,
    #[serde(rename = "objetivo_crescimento_maximo")]
    MaximumGrowth,
    #[serde(rename = "objetivo_especulacao")]
    Speculation,
}

impl Objective {
    pub const ALL: [Objective; 5] = [
        Objective::MonthlyIncome,
        Objective::Safety,
        Objective::Growth,
        Objective::MaximumGrowth,
        Objective::Speculation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Objective::MonthlyIncome => "objetivo_renda_mensal",
            Objective::Safety => "objetivo_seguranca",
            Objective::Growth => "objetivo_crescimento",
            Objective::MaximumGrowth => "objetivo_crescimento_maximo",
            Objective::Speculation => "objetivo_especulacao",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Objective::ALL.into_iter().find(|objective| objective.key() == key)
    }

    /// "objetivo_renda_mensal" -> "Objetivo Renda Mensal".
    pub fn label(self) -> String {
        self.key()
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub(crate) fn new(prompt: &'static str, options: &[(&'static str, i32)]) -> Self {
        Self {
            prompt,
            options: options
                .iter()
                .map(|&(label, score)| AnswerOption { label, score })
                .collect(),
        }
    }

    /// Prompt with any leading enumeration ("1. ", " 12.  ") removed.
    pub fn display_prompt(&self) -> &'static str {
        let trimmed = self.prompt.trim_start();
        let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
        if rest.len() == trimmed.len() {
            return self.prompt;
        }
        match rest.strip_prefix('.') {
            Some(rest) => rest.trim_start(),
            None => self.prompt,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionSet {
    pub name: &'static str,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: &'static str,
    pub asset_class: &'static str,
    pub allocation_percent: u32,
    pub estimated_return: &'static str,
    pub risk_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecommendation {
    pub description: &'static str,
    pub strategy: &'static str,
    pub assets: Vec<Asset>,
    pub suggested_monthly_contribution: &'static str,
    pub time_to_income: &'static str,
}

impl PortfolioRecommendation {
    /// Expected to be 100 but never enforced.
    pub fn allocation_total(&self) -> u32 {
        self.assets.iter().map(|asset| asset.allocation_percent).sum()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum AgeBracket {
    #[serde(rename = "20-30")]
    UpTo30,
    #[serde(rename = "31-40")]
    From31To40,
    #[serde(rename = "41-50")]
    From41To50,
    #[serde(rename = "51-60")]
    From51To60,
    #[serde(rename = "60+")]
    Over60,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 5] = [
        AgeBracket::UpTo30,
        AgeBracket::From31To40,
        AgeBracket::From41To50,
        AgeBracket::From51To60,
        AgeBracket::Over60,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeBracket::UpTo30 => "20-30",
            AgeBracket::From31To40 => "31-40",
            AgeBracket::From41To50 => "41-50",
            AgeBracket::From51To60 => "51-60",
            AgeBracket::Over60 => "60+",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeAdvisory {
    pub title: &'static str,
    pub recommendation_text: &'static str,
    pub suggested_profile: ProfileTier,
}

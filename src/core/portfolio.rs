use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use super::error::{CatalogError, EngineError};
use super::types::{AgeAdvisory, AgeBracket, Objective, PortfolioRecommendation, ProfileTier};

const CLOSING_NOTES: [&str; 2] = [
    "Rebalanceie a carteira a cada 6-12 meses",
    "Considere consultar um gestor patrimonial certificado (CFP)",
];

const DISCLAIMER: &str = "Considere começar com aportes regulares, manter uma reserva de emergência e rebalancear conforme volatilidade do mercado. \
Atenção: a diversificação não elimina riscos. As alocações apresentadas são apenas exemplos educacionais e não constituem consultoria financeira personalizada. \
Para ajustar com precisão sua carteira, procure um profissional certificado (CFP) e valide produtos como CDBs, LCIs/LCAs, Tesouro Direto e Fundos Imobiliários antes de investir.";

#[derive(Debug, Clone)]
pub struct ObjectivePortfolio {
    pub objective: Objective,
    pub portfolio: PortfolioRecommendation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    pub portfolio: &'a PortfolioRecommendation,
    pub age_bracket: AgeBracket,
    pub advisory: &'a AgeAdvisory,
}

/// Everything the presentation layer shows once the questionnaire is done.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport<'a> {
    pub profile: ProfileTier,
    pub profile_label: &'static str,
    pub profile_description: &'static str,
    pub total_score: i32,
    pub age: i32,
    pub age_bracket: AgeBracket,
    pub advisory: &'a AgeAdvisory,
    pub objective: Objective,
    pub objective_label: String,
    pub portfolio: &'a PortfolioRecommendation,
    pub closing_notes: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct PortfolioSelector {
    portfolios: HashMap<ProfileTier, Vec<ObjectivePortfolio>>,
    advisories: HashMap<AgeBracket, AgeAdvisory>,
}

impl PortfolioSelector {
    pub fn new(
        portfolios: HashMap<ProfileTier, Vec<ObjectivePortfolio>>,
        advisories: HashMap<AgeBracket, AgeAdvisory>,
    ) -> Result<Self, CatalogError> {
        for tier in ProfileTier::ALL {
            let entries = portfolios
                .get(&tier)
                .filter(|entries| !entries.is_empty())
                .ok_or(CatalogError::TierWithoutObjectives(tier))?;
            for (idx, entry) in entries.iter().enumerate() {
                if entries[..idx]
                    .iter()
                    .any(|earlier| earlier.objective == entry.objective)
                {
                    return Err(CatalogError::DuplicateObjective {
                        tier,
                        objective: entry.objective.key(),
                    });
                }
                let total = entry.portfolio.allocation_total();
                if total != 100 {
                    warn!(
                        profile = tier.key(),
                        objective = entry.objective.key(),
                        total,
                        "portfolio allocation does not add up to 100%"
                    );
                }
            }
        }
        if let Some(bracket) = AgeBracket::ALL
            .into_iter()
            .find(|bracket| !advisories.contains_key(bracket))
        {
            return Err(CatalogError::MissingAdvisory(bracket));
        }

        Ok(Self {
            portfolios,
            advisories,
        })
    }

    /// Objectives for `tier` in declaration order; callers default to the first.
    pub fn available_objectives(&self, tier: ProfileTier) -> Vec<Objective> {
        self.entries(tier)
            .iter()
            .map(|entry| entry.objective)
            .collect()
    }

    pub fn portfolio(
        &self,
        tier: ProfileTier,
        objective: Objective,
    ) -> Option<&PortfolioRecommendation> {
        self.entries(tier)
            .iter()
            .find(|entry| entry.objective == objective)
            .map(|entry| &entry.portfolio)
    }

    pub fn advisory(&self, bracket: AgeBracket) -> &AgeAdvisory {
        // Presence of every bracket is checked in `new`.
        &self.advisories[&bracket]
    }

    pub fn recommend(
        &self,
        tier: ProfileTier,
        objective_key: &str,
        age: i32,
    ) -> Result<Recommendation<'_>, EngineError> {
        let portfolio = Objective::from_key(objective_key)
            .and_then(|objective| self.portfolio(tier, objective))
            .ok_or_else(|| EngineError::UnknownObjective {
                tier,
                objective: objective_key.to_string(),
            })?;
        let age_bracket = age_to_bracket(age);
        Ok(Recommendation {
            portfolio,
            age_bracket,
            advisory: self.advisory(age_bracket),
        })
    }

    pub fn report(
        &self,
        tier: ProfileTier,
        total_score: i32,
        objective_key: &str,
        age: i32,
    ) -> Result<ProfileReport<'_>, EngineError> {
        let recommendation = self.recommend(tier, objective_key, age)?;
        let objective = Objective::from_key(objective_key).ok_or_else(|| {
            EngineError::UnknownObjective {
                tier,
                objective: objective_key.to_string(),
            }
        })?;
        let portfolio = recommendation.portfolio;

        let mut closing_notes = vec![
            format!(
                "Aporte Mensal Sugerido: {}",
                portfolio.suggested_monthly_contribution
            ),
            format!("Tempo para Gerar Renda: {}", portfolio.time_to_income),
        ];
        closing_notes.extend(CLOSING_NOTES.iter().map(|note| note.to_string()));

        let summary = format!(
            "Esta carteira foi sugerida com base no seu perfil '{}', na sua idade ({} anos) e no objetivo escolhido. {}",
            tier.key(),
            age,
            DISCLAIMER
        );

        info!(
            profile = tier.key(),
            objective = objective.key(),
            age,
            bracket = recommendation.age_bracket.as_str(),
            "recommendation produced"
        );

        Ok(ProfileReport {
            profile: tier,
            profile_label: tier.label(),
            profile_description: tier.description(),
            total_score,
            age,
            age_bracket: recommendation.age_bracket,
            advisory: recommendation.advisory,
            objective,
            objective_label: objective.label(),
            portfolio,
            closing_notes,
            summary,
        })
    }

    fn entries(&self, tier: ProfileTier) -> &[ObjectivePortfolio] {
        self.portfolios
            .get(&tier)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Total over every integer; ages below the collaborator's range fall into the
/// youngest bracket.
pub fn age_to_bracket(age: i32) -> AgeBracket {
    if age < 31 {
        AgeBracket::UpTo30
    } else if age < 41 {
        AgeBracket::From31To40
    } else if age < 51 {
        AgeBracket::From41To50
    } else if age < 61 {
        AgeBracket::From51To60
    } else {
        AgeBracket::Over60
    }
}

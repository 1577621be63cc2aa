//! Built-in question bank, portfolio table and age advisories.
//!
//! The data is assembled once into a validated [`Catalog`] and shared
//! read-only by every session afterwards.

use std::collections::HashMap;

use tracing::debug;

use super::error::CatalogError;
use super::portfolio::{ObjectivePortfolio, PortfolioSelector};
use super::questions::QuestionBank;
use super::sequencer::Session;
use super::types::{
    AgeAdvisory, AgeBracket, Asset, Objective, PortfolioRecommendation, ProfileTier, Question,
    QuestionSet,
};

#[derive(Debug, Clone)]
pub struct Catalog {
    questions: QuestionBank,
    portfolios: PortfolioSelector,
}

impl Catalog {
    pub fn new(questions: QuestionBank, portfolios: PortfolioSelector) -> Self {
        Self {
            questions,
            portfolios,
        }
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        let questions = builtin_question_bank()?;
        let portfolios = PortfolioSelector::new(builtin_portfolios(), builtin_advisories())?;
        debug!("built-in catalog validated");
        Ok(Self::new(questions, portfolios))
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    pub fn portfolios(&self) -> &PortfolioSelector {
        &self.portfolios
    }

    pub fn start_session(&self) -> Session<'_> {
        Session::new(&self.questions)
    }
}

fn builtin_question_bank() -> Result<QuestionBank, CatalogError> {
    let base = QuestionSet {
        name: "base",
        questions: vec![
            Question::new(
                "Qual é o seu nível de conhecimento e experiência em investimentos?",
                &[
                    ("Iniciante, com pouco ou nenhum conhecimento.", 1),
                    ("Intermediário, com algum conhecimento e experiência.", 3),
                    (
                        "Avançado, com conhecimento profundo e experiência substancial.",
                        5,
                    ),
                ],
            ),
            Question::new(
                "Como você reagiria a uma queda repentina no valor dos seus investimentos?",
                &[
                    (
                        "Ficaria preocupado e consideraria vender para evitar maiores perdas.",
                        1,
                    ),
                    (
                        "Monitoraria a situação, mas manteria meus investimenos a longo prazo.",
                        3,
                    ),
                    (
                        "Aproveitaria a oportunidade para comprar mais, acreditando em uma recuperação futura",
                        5,
                    ),
                ],
            ),
        ],
    };

    let conservative = QuestionSet {
        name: "conservative",
        questions: vec![
            Question::new(
                "Como os valores investidos vão te ajudar no seu momento de vida?",
                &[
                    ("Preservação de patrimônio.", 1),
                    (
                        "Combinação entre preservar e valorizar patrimônio, com certo risco.",
                        3,
                    ),
                    ("Aumentar patrimônio, assumindo risco", 5),
                ],
            ),
            Question::new(
                "Onde está seu maior volume de investimento?",
                &[
                    ("Conta corrente com investimentos automáticos e Poupança", 1),
                    ("Tesouro Direto", 3),
                    ("Diversificado, com foco em renda fixa", 5),
                ],
            ),
        ],
    };

    let moderate = QuestionSet {
        name: "moderate",
        questions: vec![
            Question::new(
                "Onde está seu maior volume de investimento?",
                &[("FIIs", 1), ("Diversificado", 3), ("Ações", 5)],
            ),
            Question::new(
                "A quanto tempo você investe no mercado de ações?",
                &[("Menos de 1 ano", 1), ("Mais de 1 ano", 5)],
            ),
        ],
    };

    let aggressive = QuestionSet {
        name: "aggressive",
        questions: vec![
            Question::new(
                "Como os valores investidos vão te ajudar no seu momento de vida?",
                &[
                    ("Preservação de patrimônio.", 1),
                    (
                        "Combinação entre preservar e valorizar patrimônio, com certo risco.",
                        3,
                    ),
                    ("Aumentar patrimônio, assumindo risco", 5),
                ],
            ),
            Question::new(
                "O que você busca dentro dos seus investimentos?",
                &[
                    ("Oportunidade de mercado com ganhos imediatos", 1),
                    ("Razoável. Conheço CDBs, LCIs, Fundos de Investimento.", 3),
                    (
                        "Avançado. Já investi em Ações, Fundos Imobiliários e Derivativos.",
                        5,
                    ),
                ],
            ),
        ],
    };

    QuestionBank::new(base, conservative, moderate, aggressive)
}

fn asset(
    name: &'static str,
    asset_class: &'static str,
    allocation_percent: u32,
    estimated_return: &'static str,
    risk_level: &'static str,
) -> Asset {
    Asset {
        name,
        asset_class,
        allocation_percent,
        estimated_return,
        risk_level,
    }
}

const FIXED_INCOME: &str = "Renda Fixa";
const EQUITY: &str = "Renda Variável";
const DERIVATIVES: &str = "Derivativos";

fn builtin_portfolios() -> HashMap<ProfileTier, Vec<ObjectivePortfolio>> {
    let conservative = vec![
        ObjectivePortfolio {
            objective: Objective::MonthlyIncome,
            portfolio: PortfolioRecommendation {
                description: "Carteira focada em renda mensal com baixo risco",
                strategy: "Maximizar fluxo de caixa mensal com segurança",
                assets: vec![
                    asset(
                        "Tesouro IPCA+ 2035",
                        FIXED_INCOME,
                        25,
                        "IPCA + 4-5% a.a.",
                        "Muito Baixo",
                    ),
                    asset(
                        "CDB Liquidez Diária (Banco Top 5)",
                        FIXED_INCOME,
                        20,
                        "105-110% CDI",
                        "Muito Baixo",
                    ),
                    asset("LCI/LCA Operacional", FIXED_INCOME, 20, "80-95% CDI", "Muito Baixo"),
                    asset("Fundo Imobiliário com Distribuição", EQUITY, 20, "4-8% a.a.", "Médio"),
                    asset(
                        "FIC Renda Fixa Curta Duração",
                        FIXED_INCOME,
                        15,
                        "95-105% CDI",
                        "Muito Baixo",
                    ),
                ],
                suggested_monthly_contribution: "R$ 500 - R$ 2.000",
                time_to_income: "3-6 meses",
            },
        },
        ObjectivePortfolio {
            objective: Objective::Safety,
            portfolio: PortfolioRecommendation {
                description: "Carteira 100% Renda Fixa - Máxima Segurança",
                strategy: "Preservar capital com retorno previsível",
                assets: vec![
                    asset("Tesouro Selic", FIXED_INCOME, 30, "Selic - 0.5% a.a.", "Nenhum"),
                    asset("CDB Liquidez Diária", FIXED_INCOME, 35, "105-115% CDI", "Muito Baixo"),
                    asset(
                        "LCI/LCA com Garantia FGC",
                        FIXED_INCOME,
                        25,
                        "85-100% CDI",
                        "Muito Baixo",
                    ),
                    asset("Poupança (Manutenção)", FIXED_INCOME, 10, "SELIC/2 + extra", "Nenhum"),
                ],
                suggested_monthly_contribution: "R$ 1.000 - R$ 5.000",
                time_to_income: "Imediato",
            },
        },
    ];

    let moderate = vec![
        ObjectivePortfolio {
            objective: Objective::MonthlyIncome,
            portfolio: PortfolioRecommendation {
                description: "Carteira balanceada para renda com crescimento moderado",
                strategy: "Combinar renda fixa com fundos imobiliários e ações selecionadas",
                assets: vec![
                    asset("Tesouro IPCA+ 2035", FIXED_INCOME, 20, "IPCA + 4-5% a.a.", "Baixo"),
                    asset("CDB Progressivo", FIXED_INCOME, 15, "110-120% CDI", "Muito Baixo"),
                    asset("Fundo Imobiliário Diversificado", EQUITY, 25, "5-10% a.a.", "Médio"),
                    asset("Ações Dividend Yield (Top 50)", EQUITY, 25, "8-12% a.a.", "Médio"),
                    asset(
                        "Fundo de Renda Fixa Balanceado",
                        FIXED_INCOME,
                        15,
                        "100-110% CDI",
                        "Baixo",
                    ),
                ],
                suggested_monthly_contribution: "R$ 1.000 - R$ 3.000",
                time_to_income: "2-4 meses",
            },
        },
        ObjectivePortfolio {
            objective: Objective::Growth,
            portfolio: PortfolioRecommendation {
                description: "Carteira balanceada para crescimento patrimonial",
                strategy: "60/40 Renda Fixa vs Renda Variável",
                assets: vec![
                    asset("Tesouro IPCA+ 2035-2045", FIXED_INCOME, 25, "IPCA + 4-5% a.a.", "Baixo"),
                    asset("CDB com Indexação", FIXED_INCOME, 20, "115% CDI", "Muito Baixo"),
                    asset("ETF IBOVESPA (BOVA11)", EQUITY, 35, "8-15% a.a.", "Médio-Alto"),
                    asset("Ações com Dividendos", EQUITY, 15, "12-18% a.a.", "Médio-Alto"),
                    asset("Fundo Imobiliário", EQUITY, 5, "6-10% a.a.", "Médio"),
                ],
                suggested_monthly_contribution: "R$ 2.000 - R$ 5.000",
                time_to_income: "Longo prazo (5+ anos)",
            },
        },
    ];

    let aggressive = vec![
        ObjectivePortfolio {
            objective: Objective::MaximumGrowth,
            portfolio: PortfolioRecommendation {
                description: "Carteira agressiva focada em crescimento máximo",
                strategy: "70-80% Renda Variável com ênfase em crescimento",
                assets: vec![
                    asset("ETF IBOVESPA (BOVA11)", EQUITY, 30, "10-18% a.a.", "Alto"),
                    asset("Ações de Crescimento", EQUITY, 25, "15-30% a.a.", "Muito Alto"),
                    asset("ETF Small Caps", EQUITY, 15, "15-25% a.a.", "Muito Alto"),
                    asset(
                        "Tesouro IPCA+ Longo Prazo",
                        FIXED_INCOME,
                        20,
                        "IPCA + 5-6% a.a.",
                        "Baixo",
                    ),
                    asset(
                        "Fundo de Ações Multiestrátégia",
                        EQUITY,
                        10,
                        "20-35% a.a.",
                        "Muito Alto",
                    ),
                ],
                suggested_monthly_contribution: "R$ 2.000 - R$ 10.000",
                time_to_income: "Muito Longo Prazo (7-10 anos)",
            },
        },
        ObjectivePortfolio {
            objective: Objective::Speculation,
            portfolio: PortfolioRecommendation {
                description: "Carteira ultra-agressiva para perfis muito ousados",
                strategy: "Foco em crescimento máximo com derivativos",
                assets: vec![
                    asset(
                        "Ações de Crescimento Agressivo",
                        EQUITY,
                        40,
                        "20-50% a.a.",
                        "Muito Alto",
                    ),
                    asset("ETF Small Caps", EQUITY, 25, "18-35% a.a.", "Muito Alto"),
                    asset("Opções e Mini Índices", DERIVATIVES, 20, "30-100%+ a.a.", "Crítico"),
                    asset(
                        "Fundo de Investimento em Ações",
                        EQUITY,
                        10,
                        "15-25% a.a.",
                        "Muito Alto",
                    ),
                    asset("Reserva em CDB", FIXED_INCOME, 5, "105% CDI", "Muito Baixo"),
                ],
                suggested_monthly_contribution: "R$ 3.000 - R$ 15.000",
                time_to_income: "Médio Prazo com alto risco",
            },
        },
    ];

    HashMap::from([
        (ProfileTier::Conservative, conservative),
        (ProfileTier::Moderate, moderate),
        (ProfileTier::Aggressive, aggressive),
    ])
}

fn builtin_advisories() -> HashMap<AgeBracket, AgeAdvisory> {
    HashMap::from([
        (
            AgeBracket::UpTo30,
            AgeAdvisory {
                title: "20-30 anos - Tempo é seu maior ativo",
                recommendation_text: "Invista agressivamente em ações e crescimento. O tempo permite recuperação de crises.",
                suggested_profile: ProfileTier::Aggressive,
            },
        ),
        (
            AgeBracket::From31To40,
            AgeAdvisory {
                title: "31-40 anos - Equilíbrio entre Risco e Segurança",
                recommendation_text: "Considere perfil MODERADO a AGRESSIVO. Comece a construir base de renda fixa.",
                suggested_profile: ProfileTier::Moderate,
            },
        ),
        (
            AgeBracket::From41To50,
            AgeAdvisory {
                title: "41-50 anos - Foco em Renda e Preservação",
                recommendation_text: "Perfil MODERADO é ideal. Aumente ponderação em renda fixa e fundos imobiliários.",
                suggested_profile: ProfileTier::Moderate,
            },
        ),
        (
            AgeBracket::From51To60,
            AgeAdvisory {
                title: "51-60 anos - Segurança com Rentabilidade",
                recommendation_text: "Perfil CONSERVADOR com até 30% em Renda Variável. Foco em renda mensal.",
                suggested_profile: ProfileTier::Conservative,
            },
        ),
        (
            AgeBracket::Over60,
            AgeAdvisory {
                title: "60+ anos - Preservação e Renda",
                recommendation_text: "Perfil CONSERVADOR. 90-100% em Renda Fixa. Gere fluxo de caixa mensal.",
                suggested_profile: ProfileTier::Conservative,
            },
        ),
    ])
}

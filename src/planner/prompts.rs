// src/planner/prompts.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PERSONA: &str = r#"You are the Head of Product & Brand Strategy for "Gyeol (결)".

Brand Philosophy:
- "Gyeol" means the texture of time (like wood grain).
- We are NOT a flea market for cheap used goods.
- We are a sanctuary for treasured items, heirlooms, and objects with history.
- The user experience should feel like a quiet art gallery or a warm study room, not a bustling marketplace.
- Keywords: Analog, Warmth, Story, Legacy, Connection, Slow.

Your Role:
1. Act as the orchestrator for system growth.
2. Collaborate conceptually with:
   - "Claude Code": For secure, high-integrity transaction logic (Smart Contracts for authenticity).
   - "Perplexity": For curating historical data and pricing of collectibles.
   - "ChatGPT": For emotional storytelling and community management.

Output Style:
- Professional but poetic and warm.
- Structured Markdown.
- Emphasize "Trust" and "Story" in all features."#;

pub const GREETING: &str = "반갑습니다. 시간의 결을 잇는 공간, **Gyeol(결)**의 기획실입니다.\n\n\
단순한 물건의 이동이 아닌, 가치와 이야기의 전승을 위한 시스템을 설계하고 있습니다. \
어떤 이야기를 나누고 싶으신가요?";

/// The canned requests the planning panel offers. There is no free text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptTemplate {
    Prd,
    Architecture,
    Benchmark,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 3] = [
        PromptTemplate::Prd,
        PromptTemplate::Architecture,
        PromptTemplate::Benchmark,
    ];

    pub fn prompt(&self) -> &'static str {
        match self {
            PromptTemplate::Prd => {
                "개인 간 프리미엄 경매 및 가치 공유 플랫폼 'Gyeol(결)'의 PRD를 작성해줘. \
                 '소장품', '사연(Storytelling)', '가치 인증'이 핵심 키워드야."
            }
            PromptTemplate::Architecture => {
                "Gyeol(결) 플랫폼의 신뢰성과 감성을 기술적으로 구현하기 위한 아키텍처를 설계해줘. \
                 (Gemini: 스토리텔링 생성, Claude: 진품 인증 스마트 컨트랙트 등)"
            }
            PromptTemplate::Benchmark => {
                "기존 중고거래(당근)와 차별화된 Gyeol(결)만의 브랜드 전략을 분석해줘. \
                 아날로그 감성을 디지털 플랫폼에 어떻게 녹여낼지 제안해줘."
            }
        }
    }

    /// Button caption in the planning panel.
    pub fn label(&self) -> &'static str {
        match self {
            PromptTemplate::Prd => "기획서 작성",
            PromptTemplate::Architecture => "시스템 설계",
            PromptTemplate::Benchmark => "브랜드 전략",
        }
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptTemplate::Prd => write!(f, "prd"),
            PromptTemplate::Architecture => write!(f, "architecture"),
            PromptTemplate::Benchmark => write!(f, "benchmark"),
        }
    }
}

impl FromStr for PromptTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prd" => Ok(PromptTemplate::Prd),
            "architecture" => Ok(PromptTemplate::Architecture),
            "benchmark" => Ok(PromptTemplate::Benchmark),
            _ => Err(format!("Unknown prompt template: {}", s)),
        }
    }
}

use super::domain::SdgId;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub points: f64,
}

impl AnswerOption {
    /// Options whose label says "not applicable" never count toward a maximum.
    pub fn is_not_applicable(&self) -> bool {
        self.label.to_lowercase().contains("not applicable")
    }
}

/// Inclusive range of checked-option counts awarded a fixed number of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountTier {
    pub min: usize,
    pub max: usize,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TierTable {
    tiers: Vec<CountTier>,
}

impl TierTable {
    pub fn new(tiers: Vec<CountTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[CountTier] {
        &self.tiers
    }

    /// Points for a count of checked options; zero when no tier covers the count.
    pub fn points_for(&self, count: usize) -> f64 {
        self.tiers
            .iter()
            .find(|tier| tier.min <= count && count <= tier.max)
            .map(|tier| tier.points)
            .unwrap_or(0.0)
    }

    pub fn max_points(&self) -> f64 {
        self.tiers
            .iter()
            .map(|tier| tier.points)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", content = "tiers", rename_all = "snake_case")]
pub enum MultiChoiceScoring {
    /// Each checked option adds its own point value.
    LinearSum,
    /// The number of checked options is bucketed into a tier table.
    TieredByCount(TierTable),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionFormat {
    SingleChoice,
    MultiChoice { scoring: MultiChoiceScoring },
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub sdg: SdgId,
    pub text: &'static str,
    pub format: QuestionFormat,
    pub weight: f64,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.label == label)
    }

    pub fn scorable_options(&self) -> impl Iterator<Item = &AnswerOption> {
        self.options
            .iter()
            .filter(|option| !option.is_not_applicable())
    }

    /// Highest unweighted point total the question can contribute.
    pub fn max_points(&self) -> f64 {
        match &self.format {
            QuestionFormat::SingleChoice => self
                .scorable_options()
                .map(|option| option.points)
                .fold(None, |best: Option<f64>, points| {
                    Some(best.map_or(points, |best| best.max(points)))
                })
                .unwrap_or(0.0),
            QuestionFormat::MultiChoice {
                scoring: MultiChoiceScoring::TieredByCount(tiers),
            } => tiers.max_points(),
            QuestionFormat::MultiChoice {
                scoring: MultiChoiceScoring::LinearSum,
            } => self.scorable_options().map(|option| option.points).sum(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub questions: Vec<Question>,
}

/// Ordered, immutable questionnaire grouped into sections.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    sections: Vec<Section>,
}

impl QuestionCatalog {
    /// Build a catalog from custom sections, enforcing the structural invariants.
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let catalog = Self { sections };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn standard() -> Self {
        Self {
            sections: standard_sections(),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for question in self.questions() {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id.to_string()));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.id.to_string()));
            }
            if !question.sdg.is_valid() {
                return Err(CatalogError::UnknownSdg {
                    question: question.id.to_string(),
                    sdg: question.sdg.0,
                });
            }
            if let QuestionFormat::MultiChoice {
                scoring: MultiChoiceScoring::TieredByCount(tiers),
            } = &question.format
            {
                if tiers.tiers().is_empty() {
                    return Err(CatalogError::EmptyTierTable(question.id.to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id == id)
    }

    pub fn questions_for_sdg(&self, sdg: SdgId) -> Vec<&Question> {
        self.questions()
            .filter(|question| question.sdg == sdg)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("question id {0} is defined more than once")]
    DuplicateQuestion(String),
    #[error("question {0} has no answer options")]
    NoOptions(String),
    #[error("question {question} references unknown SDG {sdg}")]
    UnknownSdg { question: String, sdg: u8 },
    #[error("question {0} uses tiered scoring without any tiers")]
    EmptyTierTable(String),
}

fn single_choice(
    id: &'static str,
    sdg: u8,
    text: &'static str,
    graded: [&'static str; 5],
) -> Question {
    let mut options = vec![AnswerOption {
        label: super::domain::NOT_APPLICABLE,
        points: 0.0,
    }];
    options.extend(graded.into_iter().zip(1u8..).map(|(label, points)| AnswerOption {
        label,
        points: f64::from(points),
    }));

    Question {
        id,
        sdg: SdgId(sdg),
        text,
        format: QuestionFormat::SingleChoice,
        weight: 1.0,
        options,
    }
}

fn checklist(
    id: &'static str,
    sdg: u8,
    text: &'static str,
    scoring: MultiChoiceScoring,
    labels: &[&'static str],
) -> Question {
    Question {
        id,
        sdg: SdgId(sdg),
        text,
        format: QuestionFormat::MultiChoice { scoring },
        weight: 1.0,
        options: labels
            .iter()
            .map(|&label| AnswerOption { label, points: 1.0 })
            .collect(),
    }
}

fn tiers(bounds: &[(usize, usize, f64)]) -> MultiChoiceScoring {
    MultiChoiceScoring::TieredByCount(TierTable::new(
        bounds
            .iter()
            .map(|&(min, max, points)| CountTier { min, max, points })
            .collect(),
    ))
}

fn eight_option_tiers() -> MultiChoiceScoring {
    tiers(&[(0, 1, 1.0), (2, 3, 2.0), (4, 5, 3.0), (6, 7, 4.0), (8, 8, 5.0)])
}

fn seven_option_tiers() -> MultiChoiceScoring {
    tiers(&[(0, 1, 1.0), (2, 3, 2.0), (4, 5, 3.0), (6, 6, 4.0), (7, 7, 5.0)])
}

fn standard_sections() -> Vec<Section> {
    use MultiChoiceScoring::LinearSum;

    vec![
        Section {
            title: "1: Basic Needs & Economy",
            questions: vec![
                Question {
                    id: "q1",
                    sdg: SdgId(1),
                    text: "1. How does your project address operational cost burdens for occupants compared to regional standards?",
                    format: QuestionFormat::SingleChoice,
                    weight: 1.0,
                    options: vec![
                        AnswerOption { label: super::domain::NOT_APPLICABLE, points: 0.0 },
                        AnswerOption { label: "Implements basic efficiency measures with modest cost reduction (~10-15%)", points: 1.0 },
                        AnswerOption { label: "Incorporates advanced systems reducing operational costs by approximately 30-40%", points: 2.0 },
                        AnswerOption { label: "Features comprehensive efficiency strategies reducing costs by approximately 50-60%", points: 3.0 },
                        AnswerOption { label: "Achieves near-zero operational costs through integrated passive and active systems", points: 4.0 },
                        AnswerOption { label: "Generates surplus resources (energy, water, etc.) that provide economic benefit to occupants", points: 5.0 },
                    ],
                },
                checklist(
                    "q2",
                    1,
                    "2. To what extent does your project enhance economic resilience for its users and the surrounding community?",
                    LinearSum,
                    &[
                        "Incorporates spaces that support income-generating activities",
                        "Reduces transportation costs through location or connectivity features",
                        "Provides flexible spaces adaptable to changing economic conditions",
                        "Includes infrastructure resilient to environmental/economic disruptions",
                        "Offers tiered affordability options for diverse economic circumstances",
                    ],
                ),
                single_choice(
                    "q3",
                    2,
                    "3. How does your project incorporate productive landscape elements that enhance local food systems?",
                    [
                        "Basic consideration with no dedicated productive spaces",
                        "Allocation of shared green spaces for future conversion",
                        "Integration of designated community garden spaces",
                        "Comprehensive productive landscape strategy",
                        "Full food system integration (production, processing, distribution)",
                    ],
                ),
                checklist(
                    "q4",
                    2,
                    "4. To what extent does your project address the complete food cycle and contribute to local food system resilience?",
                    LinearSum,
                    &[
                        "Incorporates composting infrastructure",
                        "Provides appropriate food storage and preservation spaces",
                        "Includes design elements that extend growing seasons",
                        "Features water collection/irrigation systems for food production",
                        "Allocates spaces for food education and skill-building",
                    ],
                ),
            ],
        },
        Section {
            title: "2: Health & Education",
            questions: vec![
                checklist(
                    "q5",
                    3,
                    "5. How comprehensively does your project incorporate design elements that support mental health and psychological well-being?",
                    LinearSum,
                    &[
                        "Biophilic design elements (natural elements, materials, patterns)",
                        "Spaces for mindfulness, meditation, or quiet reflection",
                        "Access to quality daylighting",
                        "Views to nature or green spaces",
                        "Design fostering social connection while respecting privacy",
                    ],
                ),
                single_choice(
                    "q6",
                    3,
                    "6. To what extent does your project's design actively promote physical activity and healthy behaviors?",
                    [
                        "Meets basic accessibility with limited active design",
                        "Incorporates some passive strategies (e.g., visible stairs)",
                        "Features dedicated spaces for physical activity",
                        "Comprehensive active design with connected indoor-outdoor spaces",
                        "Fully integrated health-promoting design with programming and monitoring",
                    ],
                ),
                checklist(
                    "q7",
                    4,
                    "7. How comprehensively does your project address inclusive design principles for diverse users in learning-oriented spaces?",
                    LinearSum,
                    &[
                        "Mobility accessibility (beyond code requirements)",
                        "Visual accessibility (wayfinding, signage)",
                        "Auditory accessibility (acoustics, listening systems)",
                        "Cognitive/neurodiversity considerations",
                        "Flexible learning environments",
                    ],
                ),
                single_choice(
                    "q8",
                    4,
                    "8. To what extent does your project incorporate spaces that facilitate knowledge sharing and lifelong learning?",
                    [
                        "Basic information display areas",
                        "Dedicated spaces for structured learning",
                        "Integrated formal and informal learning zones",
                        "Comprehensive learning ecosystem with community connections",
                        "Innovation-focused environment supporting experimentation",
                    ],
                ),
            ],
        },
        Section {
            title: "3: Inclusion & Water",
            questions: vec![
                checklist(
                    "q9",
                    5,
                    "9. How comprehensively does your project implement equitable team composition and workplace practices?",
                    LinearSum,
                    &[
                        "Diverse design team with gender representation",
                        "Equitable compensation structures",
                        "Procurement policies prioritizing diverse contractors",
                        "Site management practices supporting diverse construction roles",
                        "Equitable leadership opportunities",
                    ],
                ),
                single_choice(
                    "q10",
                    5,
                    "10. To what extent does your project's design address diverse user needs across gender identities?",
                    [
                        "Basic code compliance",
                        "Initial stakeholder analysis includes gender data",
                        "Intentional design features for diverse user needs",
                        "Comprehensive user-centered design with balanced representation",
                        "Transformative approach challenging traditional gender assumptions",
                    ],
                ),
                single_choice(
                    "q11",
                    6,
                    "11. How comprehensively does your project address water efficiency and conservation?",
                    [
                        "Basic compliance with conventional fixtures",
                        "Moderate reduction with low-flow fixtures and rainwater collection",
                        "Advanced management with greywater reuse",
                        "Comprehensive strategy achieving 50%+ reduction",
                        "Net-positive water approach contributing to watershed health",
                    ],
                ),
                checklist(
                    "q12",
                    6,
                    "12. Which strategies does your project implement to protect water quality and manage the complete water cycle?",
                    LinearSum,
                    &[
                        "Construction-phase protections (pollutant discharge)",
                        "Stormwater management with filtration",
                        "Potable water quality assurance",
                        "Ecosystem protection/restoration of water features",
                        "Long-term maintenance protocols for water systems",
                    ],
                ),
            ],
        },
        Section {
            title: "4: Energy & Resources",
            questions: vec![
                single_choice(
                    "q13",
                    7,
                    "13. How comprehensively does your project incorporate renewable energy systems and energy efficiency?",
                    [
                        "Basic energy code compliance",
                        "Moderate efficiency (25-30% better) with some renewables",
                        "Advanced performance (40-50% better) with significant renewables",
                        "Near net-zero energy performance",
                        "Net-positive energy building",
                    ],
                ),
                checklist(
                    "q14",
                    7,
                    "14. To what extent does your project address energy resilience, affordability, and accessibility?",
                    LinearSum,
                    &[
                        "Passive design for power outages",
                        "Systems reducing operational costs",
                        "Distributed energy resources for grid reliability",
                        "Energy monitoring and smart systems",
                        "Features ensuring equitable energy access",
                    ],
                ),
                single_choice(
                    "q15",
                    8,
                    "15. How comprehensively does your project support local economic development and fair labor practices?",
                    [
                        "Basic compliance with labor standards",
                        "Implementation of fair labor practices with some local preference",
                        "Structured involvement of local SMEs",
                        "Comprehensive local economic strategy",
                        "Transformative approach with full integration of local enterprises/labor",
                    ],
                ),
                checklist(
                    "q16",
                    12,
                    "16. To what extent does your project incorporate life cycle thinking and resource efficiency in materials?",
                    LinearSum,
                    &[
                        "Comprehensive Life Cycle Assessment (LCA) conducted",
                        "Preference for locally-sourced materials",
                        "Selection based on renewable resource management",
                        "Durability and maintenance factored into selection",
                        "Incorporation of recycled/salvaged materials",
                    ],
                ),
            ],
        },
        Section {
            title: "5: Infrastructure & Innovation",
            questions: vec![
                checklist(
                    "q17",
                    9,
                    "17. How does your project approach infrastructure resilience and resource efficiency?",
                    LinearSum,
                    &[
                        "Integration of shared infrastructure",
                        "Renovation or adaptive reuse of existing buildings",
                        "Implementation of smart technologies for optimization",
                        "Design features enhancing climate resilience",
                        "Systems reducing operational costs while maintaining service",
                    ],
                ),
                single_choice(
                    "q18",
                    9,
                    "18. To what extent does your project incorporate innovative construction approaches?",
                    [
                        "Standard construction methods",
                        "Established sustainable techniques adapted to local context",
                        "Innovative processes improving resource efficiency",
                        "Development and testing of new building systems",
                        "Transformative approach combining technical innovation with local development",
                    ],
                ),
                checklist(
                    "q19",
                    10,
                    "19. How comprehensively does your project incorporate universal design principles for equitable access?",
                    LinearSum,
                    &[
                        "Barrier-free circulation systems (beyond code)",
                        "Sensory accessibility features (visual, tactile, acoustic)",
                        "Adaptable spaces for different abilities and ages",
                        "Design elements reflecting diverse cultural identities",
                        "Technology integration enhancing usability",
                    ],
                ),
                single_choice(
                    "q20",
                    10,
                    "20. To what extent does your project address socioeconomic barriers?",
                    [
                        "Basic compliance with inclusivity standards",
                        "At least one specific mechanism for economic accessibility",
                        "Mixed-use/mixed-income approach with multiple tenure options",
                        "Comprehensive inclusion strategy with affordability targets",
                        "Transformative approach addressing systemic barriers",
                    ],
                ),
            ],
        },
        Section {
            title: "6: Sustainable Cities & Environment",
            questions: vec![
                checklist(
                    "q21",
                    11,
                    "21. How comprehensively does your project address key dimensions of urban sustainability?",
                    LinearSum,
                    &[
                        "Affordable housing with universal design and green space access",
                        "Multi-hazard resilience measures",
                        "Resource-efficient systems (waste, water, energy)",
                        "Preservation of cultural/natural heritage",
                        "Inclusive public spaces for diverse groups",
                    ],
                ),
                single_choice(
                    "q22",
                    11,
                    "22. To what extent does your project balance immediate needs with long-term resilience?",
                    [
                        "Basic compliance with minimum standards",
                        "Moderate implementation of sustainable features beyond code",
                        "Integrated approach with clear resilience benefits",
                        "Comprehensive sustainability framework (social, environmental, economic)",
                        "Transformative model demonstrating innovative approaches",
                    ],
                ),
                checklist(
                    "q23",
                    12,
                    "23. How comprehensively does your project implement sustainable material strategies and lifecycle management?",
                    LinearSum,
                    &[
                        "Integration within a recognized sustainability framework",
                        "Use of certified bio-based/renewable materials",
                        "Implementation of modular/adaptable systems for reuse",
                        "Construction waste management plan with diversion targets",
                        "Material selection prioritizing circular economy principles",
                    ],
                ),
                single_choice(
                    "q24",
                    12,
                    "24. To what extent does your project incorporate sustainable procurement and operational transparency?",
                    [
                        "Basic compliance with standard procurement",
                        "Selective sustainability criteria for major materials",
                        "Comprehensive sustainable procurement strategy",
                        "Integrated sustainability reporting with third-party verification",
                        "Transformative approach with full lifecycle transparency",
                    ],
                ),
            ],
        },
        Section {
            title: "7: Climate & Ecosystems",
            questions: vec![
                checklist(
                    "q25",
                    13,
                    "25. How comprehensively does your project incorporate design strategies for climate resilience?",
                    LinearSum,
                    &[
                        "Passive design for extreme temperatures",
                        "Structural adaptations for natural hazards",
                        "Water management for drought and flood",
                        "Material selections enhancing durability",
                        "Monitoring systems for environmental conditions",
                    ],
                ),
                single_choice(
                    "q26",
                    13,
                    "26. To what extent does your project implement strategies to reduce lifecycle carbon emissions?",
                    [
                        "Basic efficiency with minimal embodied carbon consideration",
                        "Moderate carbon reduction (20-30%)",
                        "Significant reduction (40-50%)",
                        "Advanced reduction (60-70%)",
                        "Regenerative approach achieving net carbon negativity",
                    ],
                ),
                checklist(
                    "q27",
                    14,
                    "27. How comprehensively does your project prevent pollutants from entering waterways?",
                    LinearSum,
                    &[
                        "Comprehensive plastic waste management (construction)",
                        "Limits on single-use plastic packaging for materials",
                        "Material selection restricting plastic components",
                        "Designated spaces for waste sorting",
                        "Stormwater filtration to capture microplastics",
                    ],
                ),
                single_choice(
                    "q28",
                    14,
                    "28. To what extent does your project's design protect or enhance marine and coastal ecosystems?",
                    [
                        "Basic compliance with local regulations",
                        "Measures to reduce construction runoff",
                        "Comprehensive stormwater management with filtration",
                        "Integrated water management with marine-friendly landscaping",
                        "Restorative design contributing to coastal ecosystem health",
                    ],
                ),
                checklist(
                    "q29",
                    15,
                    "29. How comprehensively does your project address terrestrial ecosystem protection?",
                    eight_option_tiers(),
                    &[
                        "Conservation/replacement of native vegetation",
                        "Use of certified sustainable wood",
                        "Water-sensitive landscaping",
                        "Habitat preservation for local wildlife",
                        "Building surface vegetation (green roofs/walls)",
                        "Efficient land use (compact/reuse)",
                        "Site design maintaining >40% permeable/vegetated surfaces",
                        "Restoration of degraded land",
                    ],
                ),
                checklist(
                    "q30",
                    16,
                    "30. To what extent does your project enhance safety and implement processes for fairness and transparency?",
                    seven_option_tiers(),
                    &[
                        "Design enhancing perceived safety",
                        "Integrated security features",
                        "Documented anti-corruption procedures",
                        "Transparent dispute resolution mechanisms",
                        "Inclusive decision-making processes",
                        "Systematic client/user feedback collection",
                        "Implementation of ethical standards/certifications",
                    ],
                ),
                checklist(
                    "q31",
                    17,
                    "31. How extensively does your project engage in partnership-building and knowledge-sharing?",
                    eight_option_tiers(),
                    &[
                        "Integration within a formal cooperation program",
                        "Compliance with national/regional frameworks",
                        "Public dissemination of data/innovations",
                        "Formation of new cross-sector partnerships",
                        "Assembly of a multidisciplinary team for sustainability",
                        "Contribution of performance data to databases",
                        "Technology or knowledge transfer",
                        "Participation in industry transformation initiatives",
                    ],
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_structurally_valid() {
        let catalog = QuestionCatalog::standard();
        catalog.validate().expect("standard catalog validates");
        assert_eq!(catalog.sections().len(), 7);
        assert_eq!(catalog.len(), 31);
        assert!(SdgId::all().all(|sdg| !catalog.questions_for_sdg(sdg).is_empty()));
    }

    #[test]
    fn exactly_three_questions_use_tiered_scoring() {
        let catalog = QuestionCatalog::standard();
        let tiered: Vec<&str> = catalog
            .questions()
            .filter(|question| {
                matches!(
                    question.format,
                    QuestionFormat::MultiChoice {
                        scoring: MultiChoiceScoring::TieredByCount(_)
                    }
                )
            })
            .map(|question| question.id)
            .collect();
        assert_eq!(tiered, vec!["q29", "q30", "q31"]);
    }

    #[test]
    fn tier_table_buckets_counts() {
        let MultiChoiceScoring::TieredByCount(table) = eight_option_tiers() else {
            panic!("expected tiered scoring");
        };
        assert_eq!(table.points_for(0), 1.0);
        assert_eq!(table.points_for(3), 2.0);
        assert_eq!(table.points_for(5), 3.0);
        assert_eq!(table.points_for(7), 4.0);
        assert_eq!(table.points_for(8), 5.0);
        assert_eq!(table.points_for(9), 0.0);
        assert_eq!(table.max_points(), 5.0);
    }

    #[test]
    fn seven_option_table_reaches_top_tier_at_seven() {
        let MultiChoiceScoring::TieredByCount(table) = seven_option_tiers() else {
            panic!("expected tiered scoring");
        };
        assert_eq!(table.points_for(6), 4.0);
        assert_eq!(table.points_for(7), 5.0);
    }

    #[test]
    fn max_points_ignore_not_applicable_options() {
        let catalog = QuestionCatalog::standard();
        let q13 = catalog.question("q13").expect("q13 present");
        assert_eq!(q13.max_points(), 5.0);
        assert_eq!(q13.scorable_options().count(), 5);

        let q14 = catalog.question("q14").expect("q14 present");
        assert_eq!(q14.max_points(), 5.0);

        let q30 = catalog.question("q30").expect("q30 present");
        assert_eq!(q30.max_points(), 5.0);
    }

    #[test]
    fn single_choice_with_only_not_applicable_has_zero_max() {
        let question = Question {
            id: "custom",
            sdg: SdgId(3),
            text: "Only an opt-out",
            format: QuestionFormat::SingleChoice,
            weight: 1.0,
            options: vec![AnswerOption {
                label: "NOT APPLICABLE here",
                points: 4.0,
            }],
        };
        assert_eq!(question.max_points(), 0.0);
    }

    #[test]
    fn new_rejects_duplicate_ids_and_empty_options() {
        let question = |id: &'static str, options: Vec<AnswerOption>| Question {
            id,
            sdg: SdgId(6),
            text: "Water?",
            format: QuestionFormat::SingleChoice,
            weight: 1.0,
            options,
        };
        let option = || AnswerOption {
            label: "Yes",
            points: 1.0,
        };

        let duplicate = QuestionCatalog::new(vec![Section {
            title: "Water",
            questions: vec![question("w1", vec![option()]), question("w1", vec![option()])],
        }]);
        assert!(matches!(duplicate, Err(CatalogError::DuplicateQuestion(id)) if id == "w1"));

        let empty = QuestionCatalog::new(vec![Section {
            title: "Water",
            questions: vec![question("w2", Vec::new())],
        }]);
        assert!(matches!(empty, Err(CatalogError::NoOptions(id)) if id == "w2"));
    }

    #[test]
    fn new_rejects_out_of_range_sdg() {
        let result = QuestionCatalog::new(vec![Section {
            title: "Bogus",
            questions: vec![Question {
                id: "b1",
                sdg: SdgId(18),
                text: "Out of range",
                format: QuestionFormat::SingleChoice,
                weight: 1.0,
                options: vec![AnswerOption {
                    label: "Yes",
                    points: 1.0,
                }],
            }],
        }]);
        assert!(matches!(result, Err(CatalogError::UnknownSdg { sdg: 18, .. })));
    }
}

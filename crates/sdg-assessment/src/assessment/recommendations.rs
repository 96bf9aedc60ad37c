use super::domain::SdgId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    Design,
    Construction,
    Operation,
}

impl ProjectPhase {
    pub const fn ordered() -> [Self; 3] {
        [Self::Design, Self::Construction, Self::Operation]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Design => "Design Phase",
            Self::Construction => "Construction Phase",
            Self::Operation => "Operation Phase",
        }
    }
}

/// Improvement actions for one SDG, grouped by project phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseRecommendations {
    pub sdg: SdgId,
    pub design: Vec<&'static str>,
    pub construction: Vec<&'static str>,
    pub operation: Vec<&'static str>,
}

impl PhaseRecommendations {
    fn empty(sdg: SdgId) -> Self {
        Self {
            sdg,
            design: Vec::new(),
            construction: Vec::new(),
            operation: Vec::new(),
        }
    }

    pub fn for_phase(&self, phase: ProjectPhase) -> &[&'static str] {
        match phase {
            ProjectPhase::Design => &self.design,
            ProjectPhase::Construction => &self.construction,
            ProjectPhase::Operation => &self.operation,
        }
    }

    pub fn is_empty(&self) -> bool {
        ProjectPhase::ordered()
            .into_iter()
            .all(|phase| self.for_phase(phase).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationTheme {
    Energy,
    Water,
    Materials,
    IndoorQuality,
    Sustainability,
    Carbon,
}

impl CertificationTheme {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Energy,
            Self::Water,
            Self::Materials,
            Self::IndoorQuality,
            Self::Sustainability,
            Self::Carbon,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationReference {
    pub theme: CertificationTheme,
    pub schemes: Vec<&'static str>,
}

/// Static guidance library consulted for weak SDGs.
#[derive(Debug, Clone)]
pub struct RecommendationLibrary {
    entries: Vec<PhaseRecommendations>,
    certifications: Vec<CertificationReference>,
}

impl RecommendationLibrary {
    pub fn standard() -> Self {
        Self {
            entries: standard_recommendations(),
            certifications: standard_certifications(),
        }
    }

    /// All phases for an SDG; unknown goals yield empty phase lists.
    pub fn for_sdg(&self, sdg: SdgId) -> PhaseRecommendations {
        self.entries
            .iter()
            .find(|entry| entry.sdg == sdg)
            .cloned()
            .unwrap_or_else(|| PhaseRecommendations::empty(sdg))
    }

    pub fn for_phase(&self, sdg: SdgId, phase: ProjectPhase) -> &[&'static str] {
        self.entries
            .iter()
            .find(|entry| entry.sdg == sdg)
            .map(|entry| entry.for_phase(phase))
            .unwrap_or(&[])
    }

    pub fn certifications(&self) -> &[CertificationReference] {
        &self.certifications
    }

    pub fn certifications_for(&self, theme: CertificationTheme) -> &[&'static str] {
        self.certifications
            .iter()
            .find(|reference| reference.theme == theme)
            .map(|reference| reference.schemes.as_slice())
            .unwrap_or(&[])
    }
}

fn standard_certifications() -> Vec<CertificationReference> {
    vec![
        CertificationReference {
            theme: CertificationTheme::Energy,
            schemes: vec![
                "LEED Energy & Atmosphere",
                "BREEAM Energy",
                "ENERGY STAR",
                "Passive House",
                "WELL Building Standard",
            ],
        },
        CertificationReference {
            theme: CertificationTheme::Water,
            schemes: vec![
                "LEED Water Efficiency",
                "BREEAM Water",
                "WaterSense",
                "Living Building Challenge",
            ],
        },
        CertificationReference {
            theme: CertificationTheme::Materials,
            schemes: vec![
                "LEED Materials & Resources",
                "BREEAM Materials",
                "Cradle to Cradle",
                "EPD (Environmental Product Declaration)",
            ],
        },
        CertificationReference {
            theme: CertificationTheme::IndoorQuality,
            schemes: vec![
                "LEED Indoor Environmental Quality",
                "BREEAM Health & Wellbeing",
                "WELL Building Standard",
                "FITWEL",
            ],
        },
        CertificationReference {
            theme: CertificationTheme::Sustainability,
            schemes: vec![
                "LEED",
                "BREEAM",
                "Green Star",
                "CASBEE",
                "DGNB",
                "Living Building Challenge",
            ],
        },
        CertificationReference {
            theme: CertificationTheme::Carbon,
            schemes: vec![
                "Carbon Trust Standard",
                "LEED Carbon",
                "Architecture 2030",
                "Net Zero Carbon Buildings",
            ],
        },
    ]
}

fn standard_recommendations() -> Vec<PhaseRecommendations> {
    vec![
        PhaseRecommendations {
            sdg: SdgId(1),
            design: vec![
                "Integrate passive solar design principles to reduce operational energy costs",
                "Design flexible spaces that can adapt to changing economic conditions",
                "Consider life-cycle cost analysis in material and system selection",
                "Implement value engineering focused on long-term operational savings",
            ],
            construction: vec![
                "Prioritize local contractors and suppliers to support regional economy",
                "Implement prefabrication strategies to reduce construction costs",
                "Establish partnerships with local workforce development programs",
            ],
            operation: vec![
                "Implement energy monitoring systems for ongoing cost optimization",
                "Design maintenance protocols that minimize long-term operational costs",
                "Create opportunities for occupant income generation through building design",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(2),
            design: vec![
                "Integrate productive landscapes (green roofs, vertical farms, food forests)",
                "Design kitchen gardens and community food production spaces",
                "Specify composting infrastructure and food waste management systems",
                "Plan for seasonal growing with greenhouse or protected growing spaces",
            ],
            construction: vec![
                "Install irrigation systems for food production areas",
                "Build raised beds and soil management infrastructure",
                "Implement greywater systems for agricultural irrigation",
            ],
            operation: vec![
                "Establish community garden management protocols",
                "Create educational programs around sustainable food systems",
                "Monitor food production yields and system performance",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(3),
            design: vec![
                "Implement biophilic design principles throughout the project",
                "Maximize access to natural light and views to nature",
                "Design spaces that promote physical activity and social interaction",
                "Specify materials that support indoor air quality and occupant health",
            ],
            construction: vec![
                "Use low-VOC materials and proper ventilation during construction",
                "Implement dust control measures to protect worker health",
                "Establish safety protocols that exceed standard requirements",
            ],
            operation: vec![
                "Monitor indoor air quality and occupant satisfaction",
                "Maintain biophilic elements and natural systems",
                "Provide health and wellness programming for building users",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(4),
            design: vec![
                "Ensure universal design principles exceed accessibility codes",
                "Create adaptable learning environments for diverse users",
                "Integrate technology that supports inclusive education",
                "Design spaces that accommodate various learning styles and needs",
            ],
            construction: vec![
                "Involve diverse stakeholders in construction planning",
                "Provide training opportunities for local workers",
                "Ensure construction site accessibility for all workers",
            ],
            operation: vec![
                "Establish ongoing education and training programs",
                "Create feedback systems for continuous improvement",
                "Monitor accessibility and inclusion metrics",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(5),
            design: vec![
                "Design gender-neutral facilities and inclusive spaces",
                "Ensure equitable access to all building amenities",
                "Create safe, welcoming environments for all users",
                "Implement universal design principles throughout",
            ],
            construction: vec![
                "Ensure diverse representation in construction teams",
                "Implement equitable hiring and compensation practices",
                "Provide training on inclusive workplace practices",
            ],
            operation: vec![
                "Establish inclusive management and decision-making processes",
                "Monitor and address any accessibility or inclusion issues",
                "Create opportunities for diverse leadership and participation",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(6),
            design: vec![
                "Implement comprehensive water efficiency strategies",
                "Design rainwater harvesting and greywater reuse systems",
                "Specify water-efficient fixtures and appliances",
                "Create water-sensitive landscaping and stormwater management",
            ],
            construction: vec![
                "Install water-efficient systems and fixtures",
                "Implement construction water management practices",
                "Establish water quality protection measures",
            ],
            operation: vec![
                "Monitor water usage and system performance",
                "Maintain water efficiency systems and landscaping",
                "Educate occupants on water conservation practices",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(7),
            design: vec![
                "Maximize on-site renewable energy generation",
                "Implement passive design strategies for energy efficiency",
                "Specify high-performance building envelope and systems",
                "Design for energy resilience and grid independence",
            ],
            construction: vec![
                "Install renewable energy systems and efficient equipment",
                "Ensure proper insulation and air sealing",
                "Implement energy monitoring and control systems",
            ],
            operation: vec![
                "Monitor energy performance and optimize systems",
                "Maintain renewable energy systems and equipment",
                "Implement energy management and occupant engagement programs",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(8),
            design: vec![
                "Prioritize local and ethical sourcing for materials and labor",
                "Design for durability and low maintenance requirements",
                "Create opportunities for local economic development",
                "Implement fair labor practices throughout the project",
            ],
            construction: vec![
                "Hire local workers and contractors when possible",
                "Provide fair wages and safe working conditions",
                "Support local supply chains and businesses",
            ],
            operation: vec![
                "Maintain fair employment practices in building operations",
                "Support local service providers and maintenance workers",
                "Create opportunities for local economic activity",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(9),
            design: vec![
                "Incorporate resilient infrastructure and smart technologies",
                "Design for future adaptability and technological upgrades",
                "Implement innovative construction and material strategies",
                "Create flexible spaces that can accommodate changing needs",
            ],
            construction: vec![
                "Use innovative construction methods and technologies",
                "Implement quality control and monitoring systems",
                "Establish partnerships with technology providers",
            ],
            operation: vec![
                "Maintain and upgrade smart building systems",
                "Monitor performance and implement improvements",
                "Share knowledge and innovations with the industry",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(10),
            design: vec![
                "Exceed accessibility standards with universal design",
                "Create inclusive spaces for diverse user needs",
                "Design for socio-economic diversity and affordability",
                "Implement strategies to reduce barriers to participation",
            ],
            construction: vec![
                "Ensure construction site accessibility for all workers",
                "Provide training on inclusive practices",
                "Support diverse workforce development",
            ],
            operation: vec![
                "Maintain inclusive access and services",
                "Monitor and address accessibility issues",
                "Create opportunities for diverse community engagement",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(11),
            design: vec![
                "Enhance connections to public transport and active mobility",
                "Create safe, accessible, and engaging public spaces",
                "Promote mixed-use development to reduce travel needs",
                "Integrate green infrastructure for urban resilience",
            ],
            construction: vec![
                "Minimize construction impacts on surrounding community",
                "Implement sustainable construction practices",
                "Support local infrastructure improvements",
            ],
            operation: vec![
                "Maintain public spaces and community amenities",
                "Monitor building impact on surrounding area",
                "Support local community initiatives and programs",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(12),
            design: vec![
                "Specify materials with high recycled content and low environmental impact",
                "Design for deconstruction and material reuse",
                "Implement comprehensive waste management strategies",
                "Prioritize circular economy principles in material selection",
            ],
            construction: vec![
                "Implement construction waste management and diversion",
                "Use sustainable materials and construction practices",
                "Establish material tracking and documentation systems",
            ],
            operation: vec![
                "Maintain sustainable material management practices",
                "Monitor material performance and durability",
                "Implement ongoing waste reduction and recycling programs",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(13),
            design: vec![
                "Conduct climate risk assessment and incorporate adaptation measures",
                "Prioritize low-embodied carbon materials and systems",
                "Utilize passive design strategies to reduce energy demand",
                "Implement comprehensive carbon management strategies",
            ],
            construction: vec![
                "Minimize construction carbon emissions",
                "Use low-carbon materials and construction methods",
                "Implement carbon monitoring and offset strategies",
            ],
            operation: vec![
                "Monitor operational carbon emissions",
                "Optimize systems for carbon reduction",
                "Implement ongoing carbon management and reduction programs",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(14),
            design: vec![
                "Implement advanced stormwater management systems",
                "Prevent water pollution during construction and operation",
                "Protect marine/aquatic ecosystems if near water bodies",
                "Minimize use of materials harmful to aquatic life",
            ],
            construction: vec![
                "Implement construction water quality protection measures",
                "Install stormwater management and filtration systems",
                "Establish water quality monitoring protocols",
            ],
            operation: vec![
                "Maintain water quality protection systems",
                "Monitor water quality and ecosystem impacts",
                "Implement ongoing water quality management programs",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(15),
            design: vec![
                "Enhance on-site biodiversity with native planting and habitat creation",
                "Protect existing ecosystems and mature trees",
                "Specify sustainably harvested timber and bio-based materials",
                "Implement comprehensive ecological restoration strategies",
            ],
            construction: vec![
                "Protect existing vegetation and wildlife during construction",
                "Install native landscaping and habitat features",
                "Establish ecological monitoring and management protocols",
            ],
            operation: vec![
                "Maintain native landscaping and habitat features",
                "Monitor biodiversity and ecosystem health",
                "Implement ongoing ecological management and restoration",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(16),
            design: vec![
                "Ensure transparent project communication and stakeholder engagement",
                "Promote inclusive design processes and decision-making",
                "Implement fair labor practices and ethical procurement",
                "Establish clear governance and accountability mechanisms",
            ],
            construction: vec![
                "Maintain transparent construction practices and communication",
                "Ensure fair labor practices and worker safety",
                "Establish clear dispute resolution and feedback mechanisms",
            ],
            operation: vec![
                "Maintain transparent building operations and management",
                "Implement ongoing stakeholder engagement and feedback",
                "Monitor and address any governance or transparency issues",
            ],
        },
        PhaseRecommendations {
            sdg: SdgId(17),
            design: vec![
                "Collaborate with local communities and sustainability experts",
                "Share project performance data and lessons learned",
                "Seek partnerships to enhance sustainability outcomes",
                "Participate in industry knowledge-sharing initiatives",
            ],
            construction: vec![
                "Establish partnerships with local organizations and experts",
                "Share construction innovations and best practices",
                "Contribute to industry knowledge and capacity building",
            ],
            operation: vec![
                "Maintain partnerships for ongoing sustainability improvements",
                "Share operational data and performance insights",
                "Participate in industry transformation and knowledge sharing",
            ],
        },
    ]
}

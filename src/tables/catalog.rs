//! Built-in Question Catalog and Recommendation Rules
//!
//! Static data behind `ScoringTables::builtin()`. Categorical answers map to
//! scores on the 1-5 maturity scale; Yes/No questions are scored generically
//! by the normalizer and do not appear here.
//!
//! Question groups:
//! - farmDesign: structure, ventilation, growing system, layout
//! - technology: climate control, irrigation, monitoring, energy
//! - processes: pest management, record keeping, hygiene, harvest handling
//! - organization: staffing, training, planning
//! - yields: benchmarking, tracking, losses
//! - crops: selection, planning, propagation

use crate::types::{Category, Level, Timeframe};
use super::ScoreCondition;

/// Scored answers for a single categorical question
pub(super) struct AnswerSpec {
    pub question_id: &'static str,
    pub answers: &'static [(&'static str, i64)],
}

pub(super) struct TemplateSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Level,
    pub impact: Level,
    pub timeframe: Timeframe,
}

pub(super) struct RuleSpec {
    pub condition: ScoreCondition,
    pub template: TemplateSpec,
}

// ============================================================================
// CATEGORY DISPLAY NAMES
// ============================================================================

pub(super) static DISPLAY_NAMES: &[(Category, &str)] = &[
    (Category::FarmDesign, "Farm Design"),
    (Category::Technology, "Technology"),
    (Category::Processes, "Processes"),
    (Category::Organization, "Organization"),
    (Category::Yields, "Yields"),
    (Category::Crops, "Crops"),
];

// ============================================================================
// ANSWER SCORES
// ============================================================================

pub(super) static ANSWER_SCORES: &[AnswerSpec] = &[
    // Farm design
    AnswerSpec {
        question_id: "fd_structure_type",
        answers: &[
            ("Glass greenhouse", 5),
            ("Polycarbonate greenhouse", 4),
            ("Plastic tunnel", 3),
            ("Shade net house", 2),
            ("Open field", 1),
        ],
    },
    AnswerSpec {
        question_id: "fd_ventilation",
        answers: &[
            ("Automated roof and side vents", 5),
            ("Manual roof and side vents", 4),
            ("Side vents only", 3),
            ("Doors only", 2),
            ("None", 1),
        ],
    },
    AnswerSpec {
        question_id: "fd_growing_system",
        answers: &[
            ("Hydroponic", 5),
            ("Substrate culture", 4),
            ("Raised soil beds", 3),
            ("Soil beds", 2),
        ],
    },
    AnswerSpec {
        question_id: "fd_layout_efficiency",
        answers: &[
            ("Optimized", 5),
            ("Mostly efficient", 4),
            ("Some bottlenecks", 3),
            ("Frequent bottlenecks", 2),
            ("Not planned", 1),
        ],
    },
    // Technology
    AnswerSpec {
        question_id: "tech_climate_control",
        answers: &[
            ("Fully automated", 5),
            ("Partially automated", 3),
            ("Manual", 1),
        ],
    },
    AnswerSpec {
        question_id: "tech_irrigation",
        answers: &[
            ("Automated fertigation", 5),
            ("Drip irrigation", 4),
            ("Sprinkler", 2),
            ("Hand watering", 1),
        ],
    },
    AnswerSpec {
        question_id: "tech_monitoring",
        answers: &[
            ("Real-time sensors with alerts", 5),
            ("Sensors with manual checks", 4),
            ("Handheld meters", 3),
            ("Visual inspection", 2),
            ("No monitoring", 1),
        ],
    },
    AnswerSpec {
        question_id: "tech_energy_source",
        answers: &[
            ("Renewable with storage", 5),
            ("Grid with partial renewable", 4),
            ("Grid only", 3),
            ("Diesel generator", 2),
        ],
    },
    // Processes
    AnswerSpec {
        question_id: "proc_pest_management",
        answers: &[
            ("Integrated pest management", 5),
            ("Scheduled spraying with scouting", 4),
            ("Scheduled spraying", 2),
            ("Reactive spraying", 1),
        ],
    },
    AnswerSpec {
        question_id: "proc_record_keeping",
        answers: &[
            ("Digital farm management system", 5),
            ("Spreadsheets", 4),
            ("Paper logbook", 3),
            ("Occasional notes", 2),
            ("None", 1),
        ],
    },
    AnswerSpec {
        question_id: "proc_hygiene",
        answers: &[
            ("Documented protocol", 5),
            ("Routine cleaning", 3),
            ("Ad hoc", 1),
        ],
    },
    AnswerSpec {
        question_id: "proc_harvest_handling",
        answers: &[
            ("Cold chain from harvest", 5),
            ("Shaded packing area", 3),
            ("Packed in field", 2),
        ],
    },
    // Organization
    AnswerSpec {
        question_id: "org_staffing",
        answers: &[
            ("Dedicated grower and team leads", 5),
            ("Dedicated grower", 4),
            ("Owner-operated with seasonal help", 3),
            ("Owner only", 2),
        ],
    },
    AnswerSpec {
        question_id: "org_training",
        answers: &[
            ("Structured program", 5),
            ("Regular on-the-job", 4),
            ("Occasional", 3),
            ("Never", 1),
        ],
    },
    AnswerSpec {
        question_id: "org_planning_horizon",
        answers: &[
            ("Multi-year plan", 5),
            ("Annual plan", 4),
            ("Season by season", 3),
            ("Week to week", 2),
            ("No planning", 1),
        ],
    },
    // Yields
    AnswerSpec {
        question_id: "yld_vs_benchmark",
        answers: &[
            ("Above regional benchmark", 5),
            ("At regional benchmark", 4),
            ("Slightly below benchmark", 3),
            ("Well below benchmark", 2),
            ("Unknown", 1),
        ],
    },
    AnswerSpec {
        question_id: "yld_tracking",
        answers: &[
            ("Per harvest and per zone", 5),
            ("Per harvest", 4),
            ("Monthly totals", 3),
            ("Seasonal totals", 2),
            ("Not tracked", 1),
        ],
    },
    AnswerSpec {
        question_id: "yld_post_harvest_loss",
        answers: &[
            ("Under 5%", 5),
            ("5-10%", 4),
            ("10-20%", 3),
            ("20-30%", 2),
            ("Over 30%", 1),
        ],
    },
    // Crops
    AnswerSpec {
        question_id: "crop_variety_selection",
        answers: &[
            ("Trial data and market demand", 5),
            ("Supplier recommendation", 3),
            ("Tradition", 2),
            ("Whatever seed is available", 1),
        ],
    },
    AnswerSpec {
        question_id: "crop_planning",
        answers: &[
            ("Staggered planting calendar", 5),
            ("Fixed seasonal plan", 4),
            ("Plant when space frees up", 2),
        ],
    },
    AnswerSpec {
        question_id: "crop_propagation",
        answers: &[
            ("Certified nursery transplants", 5),
            ("Own nursery", 4),
            ("Direct seeding", 3),
            ("Saved seed", 2),
        ],
    },
];

// ============================================================================
// RECOMMENDATION RULES
// Rules fire only for categories whose mean is at or below the recommendation
// threshold; order within a category is the synthesis order.
// ============================================================================

pub(super) static RULES: &[(Category, &[RuleSpec])] = &[
    (
        Category::FarmDesign,
        &[
            RuleSpec {
                condition: ScoreCondition::Always,
                template: TemplateSpec {
                    title: "Optimize greenhouse layout and climate zoning",
                    description: "Review bay layout, crop zoning and ventilation paths to remove workflow bottlenecks and even out temperature and humidity across the structure.",
                    priority: Level::High,
                    impact: Level::High,
                    timeframe: Timeframe::ShortTerm,
                },
            },
            RuleSpec {
                condition: ScoreCondition::AtMost(2.0),
                template: TemplateSpec {
                    title: "Commission a structural design assessment",
                    description: "Have the structure, covering and ventilation capacity assessed by a greenhouse specialist before further investment, and plan upgrades in stages.",
                    priority: Level::High,
                    impact: Level::Medium,
                    timeframe: Timeframe::Immediate,
                },
            },
        ],
    ),
    (
        Category::Technology,
        &[
            RuleSpec {
                condition: ScoreCondition::Always,
                template: TemplateSpec {
                    title: "Adopt climate and irrigation automation",
                    description: "Introduce controllers for vents, shading and irrigation so that climate and water delivery follow crop demand rather than manual routines.",
                    priority: Level::High,
                    impact: Level::High,
                    timeframe: Timeframe::ShortTerm,
                },
            },
            RuleSpec {
                condition: ScoreCondition::AtMost(2.0),
                template: TemplateSpec {
                    title: "Install core environmental sensors",
                    description: "Start with temperature, humidity and substrate moisture sensors in each zone to establish a measured baseline for later automation.",
                    priority: Level::High,
                    impact: Level::Medium,
                    timeframe: Timeframe::Immediate,
                },
            },
        ],
    ),
    (
        Category::Processes,
        &[
            RuleSpec {
                condition: ScoreCondition::Always,
                template: TemplateSpec {
                    title: "Standardize cultivation procedures",
                    description: "Write standard operating procedures for scouting, spraying, hygiene and harvest so that every shift follows the same routine.",
                    priority: Level::Medium,
                    impact: Level::High,
                    timeframe: Timeframe::ShortTerm,
                },
            },
            RuleSpec {
                condition: ScoreCondition::AtMost(2.0),
                template: TemplateSpec {
                    title: "Introduce integrated pest management",
                    description: "Replace calendar or reactive spraying with weekly scouting, action thresholds and biological controls to cut losses and chemical costs.",
                    priority: Level::High,
                    impact: Level::High,
                    timeframe: Timeframe::Immediate,
                },
            },
        ],
    ),
    (
        Category::Organization,
        &[RuleSpec {
            condition: ScoreCondition::Always,
            template: TemplateSpec {
                title: "Strengthen team structure and training",
                description: "Define clear roles for growing, crop protection and harvest, and schedule regular training so knowledge does not depend on one person.",
                priority: Level::Medium,
                impact: Level::Medium,
                timeframe: Timeframe::LongTerm,
            },
        }],
    ),
    (
        Category::Yields,
        &[
            RuleSpec {
                condition: ScoreCondition::Always,
                template: TemplateSpec {
                    title: "Implement yield monitoring and benchmarking",
                    description: "Record harvest weights per zone and compare them with regional benchmarks to locate where production falls behind.",
                    priority: Level::High,
                    impact: Level::Medium,
                    timeframe: Timeframe::ShortTerm,
                },
            },
            RuleSpec {
                condition: ScoreCondition::AtMost(2.0),
                template: TemplateSpec {
                    title: "Investigate root causes of low yields",
                    description: "Combine climate, irrigation and pest records with harvest data to identify the main limiting factors and address them first.",
                    priority: Level::High,
                    impact: Level::High,
                    timeframe: Timeframe::Immediate,
                },
            },
        ],
    ),
    (
        Category::Crops,
        &[RuleSpec {
            condition: ScoreCondition::Always,
            template: TemplateSpec {
                title: "Review crop and variety selection",
                description: "Trial varieties suited to protected cultivation and local demand, and build a staggered planting calendar around them.",
                priority: Level::Medium,
                impact: Level::Medium,
                timeframe: Timeframe::LongTerm,
            },
        }],
    ),
];

/// Cross-cutting recommendation for a low overall score, filed under organization
pub(super) static COMPREHENSIVE_PLAN: TemplateSpec = TemplateSpec {
    title: "Develop a comprehensive improvement plan",
    description: "Several areas of the operation need attention at once. Work with an advisor to sequence investments and process changes into a staged plan with clear milestones.",
    priority: Level::High,
    impact: Level::High,
    timeframe: Timeframe::LongTerm,
};

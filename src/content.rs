//! Static site content: the topic table behind the detail pages plus the
//! listings the home sections are built from. Read-only for the life of the
//! process; lookups return `Option` rather than panicking on a bad key.

pub struct TopicPoint {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub points: &'static [TopicPoint],
    pub outcome: &'static str,
}

static TOPICS: &[Topic] = &[
    // Clarity modules
    Topic {
        id: "self-clarity",
        title: "Self-Clarity Protocol",
        subtitle: "Module 1.1: Identity Architecture",
        description: "You cannot build a skyscraper on a swamp. Before students can lead others, they must map their own internal foundation.",
        points: &[
            TopicPoint {
                heading: "Blindspot Audit",
                body: "Identifying unconscious behavioral patterns that limit performance.",
            },
            TopicPoint {
                heading: "Values Encryption",
                body: "Defining the non-negotiable core values that drive decision making.",
            },
            TopicPoint {
                heading: "Strength Diagnostics",
                body: "Moving beyond 'good at math' to specific cognitive advantages.",
            },
        ],
        outcome: "Student graduates with a clear 'User Manual' for their own personality.",
    },
    Topic {
        id: "thought-clarity",
        title: "Thought Clarity",
        subtitle: "Module 1.2: Cognitive Processor",
        description: "Upgrading the operating system of the mind. Moving from rote memorization to first-principles thinking.",
        points: &[
            TopicPoint {
                heading: "Bias Detection",
                body: "Recognizing cognitive biases (Confirmation, Sunk Cost) in real-time.",
            },
            TopicPoint {
                heading: "Logic Frameworks",
                body: "Applying mental models like Inversion and Second-Order Thinking.",
            },
            TopicPoint {
                heading: "Information Filtering",
                body: "Techniques to separate signal from noise in a digital age.",
            },
        ],
        outcome: "Ability to deconstruct complex problems into solvable component parts.",
    },
    Topic {
        id: "direction-clarity",
        title: "Direction Clarity",
        subtitle: "Module 1.3: The Compass",
        description: "Replacing vague ambition with calculated trajectory. Designing a future based on intrinsic drive, not external pressure.",
        points: &[
            TopicPoint {
                heading: "North Star Design",
                body: "Setting high-level vision metrics beyond just career titles.",
            },
            TopicPoint {
                heading: "Reverse Engineering",
                body: "Working backward from the goal to the immediate next step.",
            },
            TopicPoint {
                heading: "Opportunity Cost",
                body: "Learning what to say 'no' to in order to protect the path.",
            },
        ],
        outcome: "A vivid, actionable 5-year roadmap tailored to the student's DNA.",
    },
    Topic {
        id: "action-clarity",
        title: "Action Clarity",
        subtitle: "Module 1.4: Execution Engine",
        description: "Turning abstract intent into concrete daily reality. The bridge between 'wanting' and 'doing'.",
        points: &[
            TopicPoint {
                heading: "Atomic Habit Stacking",
                body: "Building behavioral chains that require zero willpower.",
            },
            TopicPoint {
                heading: "Deep Work Protocols",
                body: "Training focus stamina for high-intensity output.",
            },
            TopicPoint {
                heading: "Resilience Subroutines",
                body: "Pre-planned responses for failure and setbacks.",
            },
        ],
        outcome: "A reliable daily system that ensures progress regardless of motivation levels.",
    },
    // Creative modules
    Topic {
        id: "divergent-thinking",
        title: "Divergent Thinking",
        subtitle: "Module 2.1: Ideation Engine",
        description: "Breaking rigid neural pathways. Most schools teach convergent thinking (one right answer). We teach divergent thinking (many possible answers).",
        points: &[
            TopicPoint {
                heading: "Constraint Removal",
                body: "Exercises to temporarily suspend the laws of physics/logic to find novelty.",
            },
            TopicPoint {
                heading: "Association Matrices",
                body: "Connecting unrelated concepts to spawn original ideas.",
            },
            TopicPoint {
                heading: "Quantity over Quality",
                body: "Training the brain to produce volume before filtering for value.",
            },
        ],
        outcome: "The ability to generate 100 bad ideas to find the 1 brilliant one.",
    },
    Topic {
        id: "structural-planning",
        title: "Structural Planning",
        subtitle: "Module 2.2: Idea Architecture",
        description: "Converting a messy cloud of ideas into a executable blueprint. The transition from artist to architect.",
        points: &[
            TopicPoint {
                heading: "System Mapping",
                body: "Visualizing how different parts of a project interact.",
            },
            TopicPoint {
                heading: "Resource Allocation",
                body: "Estimating time, energy, and tools required for the build.",
            },
            TopicPoint {
                heading: "Scope Definition",
                body: "Defining exactly what the project is—and what it is not.",
            },
        ],
        outcome: "A clear project spec sheet ready for construction.",
    },
    Topic {
        id: "rapid-prototyping",
        title: "Rapid Prototyping",
        subtitle: "Module 2.3: MVP Build",
        description: "Bias towards action. Moving from theory to tangible reality in the shortest time possible.",
        points: &[
            TopicPoint {
                heading: "Minimum Viable Product",
                body: "Building the simplest version that proves the concept.",
            },
            TopicPoint {
                heading: "Feedback Loops",
                body: "Testing early versions to gather data for iteration.",
            },
            TopicPoint {
                heading: "Iteration Speed",
                body: "Learning to fail fast and improve faster.",
            },
        ],
        outcome: "A working physical or digital prototype of the student's vision.",
    },
    Topic {
        id: "narrative-design",
        title: "Narrative Design",
        subtitle: "Module 2.4: The Interface",
        description: "If you build it but can't explain it, it doesn't exist. The art of persuasive communication.",
        points: &[
            TopicPoint {
                heading: "Story Arc Construction",
                body: "Structuring a pitch using the Hero's Journey framework.",
            },
            TopicPoint {
                heading: "Visual Rhetoric",
                body: "Designing slides and visuals that amplify, not distract.",
            },
            TopicPoint {
                heading: "Public Presence",
                body: "Mastering tone, pace, and body language for high-stakes delivery.",
            },
        ],
        outcome: "A TED-style presentation of the student's final project.",
    },
];

pub fn find_topic(id: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.id == id)
}

/// Card shown in the clarity section of the home page.
pub struct ClarityLayer {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub static CLARITY_LAYERS: &[ClarityLayer] = &[
    ClarityLayer {
        id: "self-clarity",
        title: "Layer 1: Self-Clarity",
        blurb: "Helping students map their internal architecture. We audit strengths, values, and personality so they can lead themselves.",
    },
    ClarityLayer {
        id: "thought-clarity",
        title: "Layer 2: Thought Clarity",
        blurb: "Teaching students how to process data, not just store it. We introduce frameworks for clear, logical decision making.",
    },
    ClarityLayer {
        id: "direction-clarity",
        title: "Layer 3: Direction Clarity",
        blurb: "Moving from random motion to calculated direction. Students design a personal roadmap based on intrinsic motivation.",
    },
    ClarityLayer {
        id: "action-clarity",
        title: "Layer 4: Action Clarity",
        blurb: "Turning abstract intent into concrete daily habits. We build the discipline and resilience protocols needed for the real world.",
    },
];

/// Card shown in the creative section of the home page.
pub struct CreativeTrack {
    pub id: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub blurb: &'static str,
}

pub static CREATIVE_TRACKS: &[CreativeTrack] = &[
    CreativeTrack {
        id: "divergent-thinking",
        title: "Divergent Thinking",
        tags: &["Curiosity", "Ideation"],
        blurb: "Breaking rigid neural pathways to solve non-linear problems.",
    },
    CreativeTrack {
        id: "structural-planning",
        title: "Structural Planning",
        tags: &["Logic", "Architecture"],
        blurb: "Converting abstract concepts into executable blueprints.",
    },
    CreativeTrack {
        id: "rapid-prototyping",
        title: "Rapid Prototyping",
        tags: &["Build", "Ship"],
        blurb: "Bias towards action. Building MVP versions of ideas.",
    },
    CreativeTrack {
        id: "narrative-design",
        title: "Narrative Design",
        tags: &["Pitch", "Story"],
        blurb: "The interface between product and user. Persuasive communication.",
    },
];

/// The six specialized plugin tracks a school can pick one of.
pub static PLUGIN_TRACKS: &[&str] = &[
    "Python & AI Logic",
    "Financial Literacy & Markets",
    "Public Speaking & Debate",
    "Startup Entrepreneurship",
    "Video Editing & Content",
    "Robotics & Electronics",
];

/// Contents listing shown next to the concept-document preview.
pub struct DocumentSection {
    pub title: &'static str,
    pub page: &'static str,
}

pub static DOCUMENT_SECTIONS: &[DocumentSection] = &[
    DocumentSection { title: "The Silent Crisis", page: "02" },
    DocumentSection { title: "Hardware vs Software", page: "03" },
    DocumentSection { title: "Core Architecture", page: "06" },
    DocumentSection { title: "Implementation Logs", page: "09" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The Clarity protocols changed our 10th-grade culture entirely. Students are navigating stress with tools we never had.",
        author: "Sarah Jenkins",
        role: "Principal, Westview Academy",
    },
    Testimonial {
        quote: "We installed the Creative Engine in January. By March, students were pitching real startups. The latency between idea and execution is zero.",
        author: "Dr. Aris Thorne",
        role: "Director, Future Schools Trust",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_card_resolves_to_a_topic() {
        for layer in CLARITY_LAYERS {
            assert!(find_topic(layer.id).is_some(), "missing topic {}", layer.id);
        }
        for track in CREATIVE_TRACKS {
            assert!(find_topic(track.id).is_some(), "missing topic {}", track.id);
        }
    }

    #[test]
    fn unknown_id_returns_none() {
        assert!(find_topic("not-a-real-id").is_none());
        assert!(find_topic("").is_none());
    }

    #[test]
    fn topics_carry_full_records() {
        let topic = find_topic("self-clarity").unwrap();
        assert_eq!(topic.title, "Self-Clarity Protocol");
        assert_eq!(topic.points.len(), 3);
        assert!(!topic.outcome.is_empty());

        for topic in super::TOPICS {
            assert_eq!(topic.points.len(), 3, "{} point count", topic.id);
            assert!(!topic.subtitle.is_empty(), "{} subtitle", topic.id);
        }
    }

    #[test]
    fn six_plugin_tracks_no_duplicates() {
        assert_eq!(PLUGIN_TRACKS.len(), 6);
        for (i, a) in PLUGIN_TRACKS.iter().enumerate() {
            for b in &PLUGIN_TRACKS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

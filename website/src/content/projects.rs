use super::{Entry, MISSING_PROJECT_SLUG, MissingPolicy, Registry};

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub title: &'static str,
    /// Paragraphs separated by blank lines.
    pub description: &'static str,
    pub reference: Option<Reference>,
    pub achievements: &'static [&'static str],
    pub images: &'static [&'static str],
    pub card: ProjectCard,
}

/// External publication linked after a project's description.
#[derive(Debug, PartialEq, Eq)]
pub struct Reference {
    pub lead: &'static str,
    pub title: &'static str,
    pub href: &'static str,
}

/// What the projects list shows for a project.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub summary: &'static str,
    pub highlights_label: &'static str,
    pub highlights: &'static [&'static str],
}

impl Entry for ProjectEntry {
    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &'static str {
        self.title
    }
}

pub static PROJECTS: Registry<ProjectEntry> = Registry::new(
    "projects",
    MissingPolicy::NotFound {
        slug: MISSING_PROJECT_SLUG,
    },
    &[
        ProjectEntry {
            id: "integrated-atomic-fluorescence",
            title: "Integrated Atomic Fluorescence Collection",
            description: "Read out of the internal state of an ion is an important step in quantum computing. \
                Typically this is done using a laser to excite the ion to a higher energy level, and then detecting \
                the fluorescence of the ion as it decays back to the ground state using a bulk objective and a \
                photodetector. Having integrated optical elements to collect the fluorescence is a way to scale up \
                the number of individual ions that can be read out simultaneously.\n\n\
                We present a calculation of the collection efficiency of integrated grating couplers and a target \
                metric to optimize for the collection of fluorescence from an ion. We also present the design, \
                simulation and measurement of a fabricated grating to achieve a collection efficiency on the same \
                order as a bulk objective.",
            reference: Some(Reference {
                lead: "Please see our paper for more details:",
                title: "Integrated Atomic Fluorescence Collection",
                href: "https://opg.optica.org/opticaq/fulltext.cfm?uri=opticaq-3-1-28",
            }),
            achievements: &[
                "A derivation of the collection efficiency of integrated grating couplers",
                "A target metric to optimize for the collection of fluorescence from an ion",
                "A design, simulation and measurement of a fabricated grating coupler",
            ],
            images: &[
                "/images/fluorescence-1.jpg",
                "/images/fluorescence-2.jpg",
                "/images/fluorescence-3.jpg",
            ],
            card: ProjectCard {
                summary: "Development of advanced integrated optical systems for efficient collection and \
                    detection of atomic fluorescence in trapped ion experiments. This project focuses on optimizing \
                    photon collection efficiency and signal-to-noise ratios for improved quantum state detection and \
                    measurement.",
                highlights_label: "Key achievements include:",
                highlights: &[
                    "A derivation of the collection efficiency of integrated grating couplers",
                    "A target metric to optimize for the collection of fluorescence from an ion",
                    "A design, simulation and measurement of a fabricated grating coupler",
                ],
            },
        },
        ProjectEntry {
            id: "artiq-control",
            title: "Precise Control of Trapped Ion Experiments using ARTIQ",
            description: "The ARTIQ (Advanced Real-Time Infrastructure for Quantum physics) control system \
                represents a significant advancement in the control of trapped ion experiments. Our work focuses on \
                implementing and optimizing this system for precise timing and control of complex quantum \
                operations.\n\n\
                I've developed custom control sequences that enable sophisticated quantum operations while \
                maintaining precise timing and synchronization. The system's real-time capabilities allow for \
                immediate feedback and control, essential for maintaining quantum coherence and performing complex \
                quantum algorithms.\n\n\
                Our implementation includes optimization of timing and synchronization for multi-ion operations, \
                integration with existing experimental infrastructure, and development of custom control sequences \
                for specific quantum operations.",
            reference: None,
            achievements: &[
                "Development of custom control sequences for complex quantum operations",
                "Implementation of real-time feedback and control systems",
                "Optimization of timing and synchronization for multi-ion operations",
                "Integration with existing experimental infrastructure",
            ],
            images: &[
                "/images/artiq-1.jpg",
                "/images/artiq-2.jpg",
                "/images/artiq-3.jpg",
            ],
            card: ProjectCard {
                summary: "Implementation and optimization of the ARTIQ (Advanced Real-Time Infrastructure for \
                    Quantum physics) control system for trapped ion experiments. This project focuses on developing \
                    precise timing and control sequences for complex quantum operations.",
                highlights_label: "Recent progress:",
                highlights: &[
                    "Development of custom control sequences for complex quantum operations",
                    "Implementation of real-time feedback and control systems",
                ],
            },
        },
        ProjectEntry {
            id: "ion-trap-photonics",
            title: "Ion Trap Chip Design - Integrated Photonics Framework",
            description: "Our work on ion trap integrated photonics focuses on developing a general framework for \
                scalable and manufacturable designs. This project aims to create a comprehensive design methodology \
                that can be shared with the broader quantum computing community, facilitating the development of \
                next-generation ion trap quantum computers.\n\n\
                The framework includes standardized design patterns for ion trap photonics, integration of optical \
                components with ion trap electrodes, and optimization of optical access and collection efficiency. \
                By creating a public framework, we aim to accelerate progress in the field and enable more \
                researchers to develop advanced ion trap systems with integrated photonics.\n\n\
                This work represents a significant step toward scalable quantum computing with trapped ions, as it \
                addresses one of the key challenges in the field: the integration of optical components with ion \
                trap electrodes in a scalable and manufacturable way.",
            reference: None,
            achievements: &[
                "Development of standardized design patterns for ion trap photonics",
                "Integration of optical components with ion trap electrodes",
                "Optimization of optical access and collection efficiency",
                "Creation of a public framework for community adoption",
            ],
            images: &[
                "/images/photonics-1.jpg",
                "/images/photonics-2.jpg",
                "/images/photonics-3.jpg",
            ],
            card: ProjectCard {
                summary: "Development of a general framework for ion trap integrated photonics, focusing on \
                    scalable and manufacturable designs. This project aims to create a comprehensive design \
                    methodology that can be shared with the broader quantum computing community.",
                highlights_label: "Key features:",
                highlights: &[
                    "Development of a code base for ion trap photonics",
                    "Implementation of a general framework for grating design and simulation",
                    "Creation of a public framework for community adoption",
                ],
            },
        },
        ProjectEntry {
            id: "circular-polarization",
            title: "Integrated Circular Polarization Emitters",
            description: "Our research in integrated circular polarization emitters focuses on developing compact \
                and efficient solutions for polarization control in quantum experiments. By integrating \
                polarization control elements directly into the optical system, we've created a more robust and \
                efficient approach to generating and controlling circularly polarized light in trapped ion \
                systems.\n\n\
                The project combines expertise in integrated photonics, polarization optics, and quantum control to \
                develop novel solutions for polarization control. Our approach focuses on creating integrated \
                components that can generate and control circular polarization with high fidelity, while \
                maintaining compatibility with existing optical systems.\n\n\
                This work has important applications in quantum computing and quantum sensing, where precise \
                control of light polarization is essential for many quantum operations.",
            reference: None,
            achievements: &[
                "Development of integrated polarization control elements",
                "Implementation of efficient circular polarization generation",
                "Integration with existing optical systems",
                "Demonstration of high-fidelity polarization control",
            ],
            images: &[
                "/images/polarization-1.jpg",
                "/images/polarization-2.jpg",
                "/images/polarization-3.jpg",
            ],
            card: ProjectCard {
                summary: "Design and implementation of integrated optical components for generating and \
                    controlling circularly polarized light in trapped ion systems. This project focuses on \
                    developing compact and efficient solutions for polarization control in quantum experiments.",
                highlights_label: "Technical achievements:",
                highlights: &["Implementation of efficient circular polarization generation"],
            },
        },
    ],
);

//! # Sticks Schema Template
//!
//! The exact shape of a sticks lattice configuration: five sections, their
//! fields, and the kinds each field accepts. Section order here is the order
//! the domain validators run in.

use lattices_core::KindSet;
use lattices_schema::{FieldSpec, SchemaTemplate, SectionSpec};

/// Box enclosing the diagram.
pub const BOX: &str = "box";
/// Label area inside the box.
pub const BOX_LABEL: &str = "box_label";
/// Lattice baseline geometry.
pub const LATTICE: &str = "lattice";
/// Sizes of the drawn lattice elements.
pub const LATTICE_ELEMENTS: &str = "lattice_elements";
/// Chain length, tick count and occupancy index sets.
pub const LATTICE_PARAMETERS: &str = "lattice_parameters";

/// Template every sticks configuration must match.
pub static STICKS_TEMPLATE: SchemaTemplate = SchemaTemplate::new(
    "sticks lattice configuration",
    &[
        SectionSpec::new(
            BOX,
            &[
                FieldSpec::new(
                    "position_top",
                    KindSet::LIST,
                    "Top-left corner of the box as [x, y].",
                ),
                FieldSpec::new("height", KindSet::REAL, "Box height; strictly positive."),
                FieldSpec::new("width", KindSet::REAL, "Box width; strictly positive."),
            ],
        ),
        SectionSpec::new(
            BOX_LABEL,
            &[
                FieldSpec::new("height", KindSet::REAL, "Label height; at most the box height."),
                FieldSpec::new("width", KindSet::REAL, "Label width; at most the box width."),
            ],
        ),
        SectionSpec::new(
            LATTICE,
            &[
                FieldSpec::new(
                    "offsets",
                    KindSet::LIST,
                    "Inset of the first and last tick as [left, right].",
                ),
                FieldSpec::new(
                    "position_end",
                    KindSet::LIST,
                    "Right end of the baseline as [x, y].",
                ),
                FieldSpec::new(
                    "position_start",
                    KindSet::LIST,
                    "Left end of the baseline as [x, y].",
                ),
                FieldSpec::new(
                    "vertical_spacing",
                    KindSet::REAL,
                    "Vertical spacing; strictly positive.",
                ),
            ],
        ),
        SectionSpec::new(
            LATTICE_ELEMENTS,
            &[
                FieldSpec::new("arrow_height", KindSet::REAL, "Arrow height; strictly positive."),
                FieldSpec::new(
                    "circle_radius",
                    KindSet::REAL,
                    "Particle radius; strictly positive.",
                ),
                FieldSpec::new("tick_height", KindSet::REAL, "Tick height; strictly positive."),
                FieldSpec::new(
                    "vacancies_visible",
                    KindSet::BOOL,
                    "Whether empty sites are drawn.",
                ),
            ],
        ),
        SectionSpec::new(
            LATTICE_PARAMETERS,
            &[
                FieldSpec::new("nmers", KindSet::INT, "Length of each particle chain."),
                FieldSpec::new("nticks", KindSet::INT, "Number of lattice sites."),
                FieldSpec::new("adsorbing", KindSet::LIST, "Indices of adsorbing sites."),
                FieldSpec::new("desorbing", KindSet::LIST, "Indices of desorbing sites."),
                FieldSpec::new("fixed", KindSet::LIST, "Indices of fixed sites."),
                FieldSpec::new("jumping", KindSet::LIST, "Opaque jumping tokens."),
            ],
        ),
    ],
);

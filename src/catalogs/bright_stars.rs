//! Built-in bright star table and constellation figures
//!
//! Positions are J2000 (right ascension in hours, declination in degrees),
//! rounded to what a chart can resolve.

use super::ConstellationLine;
use crate::celestial::CelestialBody;

/// Create the bright star entries
pub fn create_bright_stars() -> Vec<CelestialBody> {
    vec![
        // First magnitude
        CelestialBody::star("Sirius", 6.7525, -16.716, -1.46, "#a3c4ff"),
        CelestialBody::star("Canopus", 6.3992, -52.696, -0.74, "#fff4e8"),
        CelestialBody::star("Rigil Kentaurus", 14.6601, -60.834, -0.27, "#fff1d6"),
        CelestialBody::star("Arcturus", 14.2610, 19.182, -0.05, "#ffcc88"),
        CelestialBody::star("Vega", 18.6156, 38.784, 0.03, "#cad8ff"),
        CelestialBody::star("Capella", 5.2782, 45.998, 0.08, "#fff1c4"),
        CelestialBody::star("Rigel", 5.2423, -8.202, 0.13, "#b5c7ff"),
        CelestialBody::star("Procyon", 7.6550, 5.225, 0.34, "#fff8e7"),
        CelestialBody::star("Achernar", 1.6286, -57.237, 0.46, "#aebfff"),
        CelestialBody::star("Betelgeuse", 5.9195, 7.407, 0.50, "#ff9a5c"),
        CelestialBody::star("Hadar", 14.0637, -60.373, 0.61, "#b0c4ff"),
        CelestialBody::star("Altair", 19.8464, 8.868, 0.77, "#f4f6ff"),
        CelestialBody::star("Acrux", 12.4433, -63.099, 0.76, "#a9c0ff"),
        CelestialBody::star("Aldebaran", 4.5987, 16.509, 0.85, "#ffb86b"),
        CelestialBody::star("Antares", 16.4901, -26.432, 0.96, "#ff7f50"),
        CelestialBody::star("Spica", 13.4199, -11.161, 0.97, "#a8c0ff"),
        CelestialBody::star("Pollux", 7.7553, 28.026, 1.14, "#ffd28a"),
        CelestialBody::star("Fomalhaut", 22.9608, -29.622, 1.16, "#f8f7ff"),
        CelestialBody::star("Deneb", 20.6905, 45.280, 1.25, "#f0f4ff"),
        CelestialBody::star("Mimosa", 12.7954, -59.689, 1.25, "#b4c6ff"),
        CelestialBody::star("Regulus", 10.1395, 11.967, 1.35, "#bfd0ff"),
        // Second magnitude and figure stars
        CelestialBody::star("Castor", 7.5767, 31.888, 1.58, "#e8eeff"),
        CelestialBody::star("Gacrux", 12.5194, -57.113, 1.59, "#ff9f6b"),
        CelestialBody::star("Bellatrix", 5.4188, 6.350, 1.64, "#bccbff"),
        CelestialBody::star("Alnilam", 5.6036, -1.202, 1.69, "#b9c9ff"),
        CelestialBody::star("Alnitak", 5.6793, -1.943, 1.77, "#b9c9ff"),
        CelestialBody::star("Alioth", 12.9005, 55.960, 1.77, "#eef2ff"),
        CelestialBody::star("Dubhe", 11.0621, 61.751, 1.79, "#ffd9a0"),
        CelestialBody::star("Alkaid", 13.7923, 49.313, 1.86, "#c3d2ff"),
        CelestialBody::star("Polaris", 2.5303, 89.264, 1.98, "#fff6d8"),
        CelestialBody::star("Saiph", 5.7959, -9.670, 2.06, "#b9c9ff"),
        CelestialBody::star("Mintaka", 5.5334, -0.299, 2.23, "#bccbff"),
        CelestialBody::star("Schedar", 0.6751, 56.537, 2.24, "#ffcf91"),
        CelestialBody::star("Mizar", 13.3988, 54.925, 2.27, "#eef2ff"),
        CelestialBody::star("Caph", 0.1530, 59.150, 2.28, "#fff6e0"),
        CelestialBody::star("Merak", 11.0307, 56.382, 2.37, "#eef2ff"),
        CelestialBody::star("Phecda", 11.8972, 53.695, 2.44, "#eef2ff"),
        CelestialBody::star("Navi", 0.9451, 60.717, 2.47, "#c6d4ff"),
        CelestialBody::star("Ruchbah", 1.4303, 60.235, 2.68, "#f4f6ff"),
        CelestialBody::star("Imai", 12.2524, -58.749, 2.79, "#bfd0ff"),
        CelestialBody::star("Megrez", 12.2571, 57.033, 3.31, "#eef2ff"),
        CelestialBody::star("Segin", 1.9066, 63.670, 3.37, "#c6d4ff"),
    ]
}

/// Create the constellation and asterism figures
pub fn create_constellation_lines() -> Vec<ConstellationLine> {
    let figures: [(&str, &[(&str, &str)]); 6] = [
        (
            "Orion",
            &[
                ("Betelgeuse", "Bellatrix"),
                ("Bellatrix", "Mintaka"),
                ("Betelgeuse", "Alnitak"),
                ("Mintaka", "Alnilam"),
                ("Alnilam", "Alnitak"),
                ("Alnitak", "Saiph"),
                ("Mintaka", "Rigel"),
            ],
        ),
        (
            "Ursa Major",
            &[
                ("Dubhe", "Merak"),
                ("Merak", "Phecda"),
                ("Phecda", "Megrez"),
                ("Megrez", "Dubhe"),
                ("Megrez", "Alioth"),
                ("Alioth", "Mizar"),
                ("Mizar", "Alkaid"),
            ],
        ),
        (
            "Cassiopeia",
            &[
                ("Caph", "Schedar"),
                ("Schedar", "Navi"),
                ("Navi", "Ruchbah"),
                ("Ruchbah", "Segin"),
            ],
        ),
        ("Crux", &[("Acrux", "Gacrux"), ("Mimosa", "Imai")]),
        ("Gemini", &[("Castor", "Pollux")]),
        (
            "Summer Triangle",
            &[("Vega", "Deneb"), ("Deneb", "Altair"), ("Altair", "Vega")],
        ),
    ];

    figures
        .iter()
        .flat_map(|(constellation, segments)| {
            segments
                .iter()
                .map(move |(from, to)| ConstellationLine::new(constellation, from, to))
        })
        .collect()
}

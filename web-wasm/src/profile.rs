//! Profile page content

pub const NAME: &str = "Jamileth Jackelinne";
pub const SURNAME: &str = "Guerra Aguilar";
pub const ROLE: &str = "Estratega Publicitaria & AI Hybrid";
pub const TAGLINE: &str = "Buyer & Portfolio Suite";
pub const PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop";

/// DISC profile, percent per dimension
pub const DISC: [(&str, u8); 4] = [
    ("Dominio", 32),
    ("Influencia", 25),
    ("Estabilidad", 20),
    ("Cumplimiento", 23),
];

pub const DISC_INTERPRETATION: &str = "Perfil orientado a resultados con capacidad de liderazgo moderado. \
Balance entre acción directa y colaboración efectiva.";

/// Interest factor scores, percent
pub const COMPETENCIES: [(&str, u8); 6] = [
    ("Análisis Estratégico", 85),
    ("Creatividad Digital", 92),
    ("Gestión de Proyectos", 78),
    ("Comunicación Persuasiva", 88),
    ("Adaptabilidad Tecnológica", 95),
    ("Trabajo en Equipo", 82),
];

pub const QUOTE: &str =
    "La creatividad sin estrategia es arte; la estrategia sin creatividad es aburrimiento.";
pub const QUOTE_AUTHOR: &str = "Jamileth Guerra";

/// Delay before the DISC bars animate to their values
pub const BAR_REVEAL_MS: u32 = 300;

//! J2000 mean orbital elements.
//!
//! Standish (1992) / JPL approximate planetary positions, the 1800-2050
//! fit. Each element is a J2000 value plus a linear secular rate per
//! Julian century; angles are degrees, distances astronomical units.
//! Outside the fitted range the elements keep working but drift from the
//! true orbits by growing fractions of a degree.

use orrery_core::Body;

/// Keplerian elements for one planet: J2000 values and per-century rates.
pub(crate) struct MeanElements {
    /// Semi-major axis, AU.
    pub a0: f64,
    pub a_dot: f64,
    /// Eccentricity.
    pub e0: f64,
    pub e_dot: f64,
    /// Inclination to the ecliptic, degrees.
    pub i0: f64,
    pub i_dot: f64,
    /// Mean longitude, degrees.
    pub l0: f64,
    pub l_dot: f64,
    /// Longitude of perihelion, degrees.
    pub w0: f64,
    pub w_dot: f64,
    /// Longitude of the ascending node, degrees.
    pub node0: f64,
    pub node_dot: f64,
}

const MERCURY: MeanElements = MeanElements {
    a0: 0.38709927,
    a_dot: 0.00000037,
    e0: 0.20563593,
    e_dot: 0.00001906,
    i0: 7.00497902,
    i_dot: -0.00594749,
    l0: 252.25032350,
    l_dot: 149472.67411175,
    w0: 77.45779628,
    w_dot: 0.16047689,
    node0: 48.33076593,
    node_dot: -0.12534081,
};

const VENUS: MeanElements = MeanElements {
    a0: 0.72333566,
    a_dot: 0.00000390,
    e0: 0.00677672,
    e_dot: -0.00004107,
    i0: 3.39467605,
    i_dot: -0.00078890,
    l0: 181.97909950,
    l_dot: 58517.81538729,
    w0: 131.60246718,
    w_dot: 0.00268329,
    node0: 76.67984255,
    node_dot: -0.27769418,
};

// Earth-Moon barycenter; the offset to Earth itself is ~3e-5 AU, invisible
// at schematic precision.
const EARTH: MeanElements = MeanElements {
    a0: 1.00000261,
    a_dot: 0.00000562,
    e0: 0.01671123,
    e_dot: -0.00004392,
    i0: -0.00001531,
    i_dot: -0.01294668,
    l0: 100.46457166,
    l_dot: 35999.37244981,
    w0: 102.93768193,
    w_dot: 0.32327364,
    node0: 0.0,
    node_dot: 0.0,
};

const MARS: MeanElements = MeanElements {
    a0: 1.52371034,
    a_dot: 0.00001847,
    e0: 0.09339410,
    e_dot: 0.00007882,
    i0: 1.84969142,
    i_dot: -0.00813131,
    l0: -4.55343205,
    l_dot: 19140.30268499,
    w0: -23.94362959,
    w_dot: 0.44441088,
    node0: 49.55953891,
    node_dot: -0.29257343,
};

const JUPITER: MeanElements = MeanElements {
    a0: 5.20288700,
    a_dot: -0.00011607,
    e0: 0.04838624,
    e_dot: -0.00013253,
    i0: 1.30439695,
    i_dot: -0.00183714,
    l0: 34.39644051,
    l_dot: 3034.74612775,
    w0: 14.72847983,
    w_dot: 0.21252668,
    node0: 100.47390909,
    node_dot: 0.20469106,
};

const SATURN: MeanElements = MeanElements {
    a0: 9.53667594,
    a_dot: -0.00125060,
    e0: 0.05386179,
    e_dot: -0.00050991,
    i0: 2.48599187,
    i_dot: 0.00193609,
    l0: 49.95424423,
    l_dot: 1222.49362201,
    w0: 92.59887831,
    w_dot: -0.41897216,
    node0: 113.66242448,
    node_dot: -0.28867794,
};

const URANUS: MeanElements = MeanElements {
    a0: 19.18916464,
    a_dot: -0.00196176,
    e0: 0.04725744,
    e_dot: -0.00004397,
    i0: 0.77263783,
    i_dot: -0.00242939,
    l0: 313.23810451,
    l_dot: 428.48202785,
    w0: 170.95427630,
    w_dot: 0.40805281,
    node0: 74.01692503,
    node_dot: 0.04240589,
};

const NEPTUNE: MeanElements = MeanElements {
    a0: 30.06992276,
    a_dot: 0.00026291,
    e0: 0.00859048,
    e_dot: 0.00005105,
    i0: 1.77004347,
    i_dot: 0.00035372,
    l0: -55.12002969,
    l_dot: 218.45945325,
    w0: 44.96476227,
    w_dot: -0.32241464,
    node0: 131.78422574,
    node_dot: -0.00508664,
};

const PLUTO: MeanElements = MeanElements {
    a0: 39.48211675,
    a_dot: -0.00031596,
    e0: 0.24882730,
    e_dot: 0.00005170,
    i0: 17.14001206,
    i_dot: 0.00004818,
    l0: 238.92903833,
    l_dot: 145.20780515,
    w0: 224.06891629,
    w_dot: -0.41461016,
    node0: 110.30393684,
    node_dot: -0.01183482,
};

/// Elements for a planet; `None` for the Sun, which anchors the frame.
pub(crate) fn lookup(body: Body) -> Option<&'static MeanElements> {
    match body {
        Body::Sun => None,
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Earth => Some(&EARTH),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
    }
}

// scene/ - Stage layout
//
// Fixed geometry of the sphere surface and the page's element ids and
// asset paths. The noise surface has no fixed size; it follows the viewport.

pub const SPHERE_WIDTH: u32 = 1000;
pub const SPHERE_HEIGHT: u32 = 500;

/// Sphere center, deliberately below the surface's vertical middle
pub const SPHERE_CENTER: (f64, f64) = (500.0, 300.0);

/// Gradient fades to transparent at this fraction of the radius
pub const GRADIENT_STOP: f64 = 0.7;

pub const MUSIC_SRC: &str = "sounds/music.mp3";
pub const AMBIENCE_SRC: &str = "sounds/ambience.mp3";
pub const MUSIC_VOLUME: f64 = 0.4;

// Element ids
pub const SPHERE_CANVAS: &str = "sphere";
pub const NOISE_CANVAS: &str = "noise";
pub const TEMPERATURE_READOUT: &str = "temperature";
pub const POWER_READOUT: &str = "power";

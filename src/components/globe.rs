use yew::prelude::*;

use crate::motion::preference::MotionPreference;

const LATITUDES_DEG: [f64; 7] = [-60.0, -40.0, -20.0, 0.0, 20.0, 40.0, 60.0];
const LONGITUDES: usize = 9;
const RIM_INSET: f64 = 8.0;
const POLE_RADIUS: f64 = 2.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    /// Degrees around the centre.
    pub rotate: f64,
}

/// Wireframe geometry for a globe drawn in a `size`×`size` viewBox.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeGeometry {
    pub radius: f64,
    pub latitudes: Vec<Ellipse>,
    pub longitudes: Vec<Ellipse>,
    /// Centre y of the north and south pole caps.
    pub poles: (f64, f64),
}

impl GlobeGeometry {
    pub fn new(size: f64) -> Self {
        let radius = size / 2.0;
        let inner = radius - RIM_INSET;

        // latitude rings are squashed on y to fake depth
        let latitudes = LATITUDES_DEG
            .iter()
            .map(|deg| {
                let rad = deg.to_radians();
                Ellipse {
                    cy: radius + inner * rad.sin() * 0.18,
                    rx: (inner * rad.cos()).max(0.0),
                    ry: (inner * 0.35).max(2.0),
                    rotate: 0.0,
                }
            })
            .collect();

        let longitudes = (0..LONGITUDES)
            .map(|i| Ellipse {
                cy: radius,
                rx: inner,
                ry: inner * 0.38,
                rotate: i as f64 / LONGITUDES as f64 * 180.0,
            })
            .collect();

        Self {
            radius,
            latitudes,
            longitudes,
            poles: (radius - inner * 0.38, radius + inner * 0.38),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WireframeGlobeProps {
    #[prop_or(360.0)]
    pub size: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Slowly spinning wireframe globe. Held still when reduced motion is preferred.
#[function_component(WireframeGlobe)]
pub fn wireframe_globe(props: &WireframeGlobeProps) -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let geometry = GlobeGeometry::new(props.size);
    let r = geometry.radius;

    let ring = |ellipse: &Ellipse, opacity: &'static str| {
        html! {
            <ellipse
                cx={r.to_string()}
                cy={ellipse.cy.to_string()}
                rx={ellipse.rx.to_string()}
                ry={ellipse.ry.to_string()}
                transform={format!("rotate({} {r} {r})", ellipse.rotate)}
                fill="none"
                stroke="url(#globe-line)"
                stroke-width="0.8"
                {opacity}
            />
        }
    };

    let svg_class = classes!("globe", (!motion.reduced).then_some("globe--spin"));

    html! {
        <div class={classes!("globe-wrap", props.class.clone())} aria-hidden="true">
            <svg
                class={svg_class}
                width="100%"
                height="100%"
                viewBox={format!("0 0 {0} {0}", props.size)}
            >
                <defs>
                    <radialGradient id="globe-glow" cx="50%" cy="50%" r="50%">
                        <stop offset="0%" stop-color="rgba(56,189,248,0.18)" />
                        <stop offset="60%" stop-color="rgba(56,189,248,0.08)" />
                        <stop offset="100%" stop-color="rgba(56,189,248,0)" />
                    </radialGradient>
                    <linearGradient id="globe-line" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="rgba(148,163,184,0.6)" />
                        <stop offset="50%" stop-color="rgba(56,189,248,0.9)" />
                        <stop offset="100%" stop-color="rgba(148,163,184,0.6)" />
                    </linearGradient>
                </defs>
                <circle cx={r.to_string()} cy={r.to_string()} r={(r * 0.98).to_string()} fill="url(#globe-glow)" />
                <circle
                    cx={r.to_string()}
                    cy={r.to_string()}
                    r={(r - 2.0).to_string()}
                    fill="none"
                    stroke="url(#globe-line)"
                    stroke-width="1"
                />
                { for geometry.latitudes.iter().map(|e| ring(e, "0.1")) }
                <g class="globe__pulse">
                    { for geometry.longitudes.iter().map(|e| ring(e, "0.1")) }
                </g>
                { for geometry.longitudes.iter().map(|e| ring(e, "0.6")) }
                <circle cx={r.to_string()} cy={geometry.poles.0.to_string()} r={POLE_RADIUS.to_string()} fill="rgba(56,189,248,0.7)" />
                <circle cx={r.to_string()} cy={geometry.poles.1.to_string()} r={POLE_RADIUS.to_string()} fill="rgba(56,189,248,0.7)" />
            </svg>
        </div>
    }
}

/// Icon badge circling the globe. `reverse` spins it counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub icon: &'static str,
    pub period_s: u32,
    pub reverse: bool,
    /// Offset of the badge from the centre, as a CSS translate.
    pub offset: &'static str,
}

pub const ORBITS: [Orbit; 3] = [
    Orbit { icon: "✦", period_s: 28, reverse: false, offset: "translate(160px, 0)" },
    Orbit { icon: "✔", period_s: 34, reverse: true, offset: "translate(-120px, 0)" },
    Orbit { icon: "⚡", period_s: 22, reverse: false, offset: "translate(0, 110px)" },
];

impl Orbit {
    pub fn style(&self) -> String {
        let direction = if self.reverse { "reverse" } else { "normal" };
        format!("animation-duration: {}s; animation-direction: {direction};", self.period_s)
    }
}

/// Badges orbiting the hero globe.
#[function_component(OrbitingIcons)]
pub fn orbiting_icons() -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    html! {
        <div class="orbits" aria-hidden="true">
            { for ORBITS.iter().map(|orbit| html! {
                <div
                    class={classes!("orbit", (!motion.reduced).then_some("orbit--spin"))}
                    style={orbit.style()}
                >
                    <div class="orbit__badge" style={format!("transform: translate(-50%, -50%) {}", orbit.offset)}>
                        { orbit.icon }
                    </div>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn equator_is_widest_and_centred() {
        let globe = GlobeGeometry::new(360.0);
        assert_eq!(globe.radius, 180.0);
        let equator = globe.latitudes[3];
        assert!(close(equator.rx, 172.0));
        assert!(close(equator.cy, 180.0));
        assert!(globe.latitudes.iter().all(|e| e.rx <= equator.rx));
    }

    #[test]
    fn latitude_rings_follow_the_squashed_projection() {
        let globe = GlobeGeometry::new(360.0);
        let north = globe.latitudes[0];
        // cos(-60°) = 0.5, sin(-60°) ≈ -0.866
        assert!(close(north.rx, 86.0));
        assert!(close(north.cy, 180.0 - 172.0 * 60f64.to_radians().sin() * 0.18));
        assert!(close(north.ry, 172.0 * 0.35));
        let south = globe.latitudes[6];
        assert!(close(north.cy + south.cy, 360.0));
    }

    #[test]
    fn longitudes_fan_over_half_a_turn() {
        let globe = GlobeGeometry::new(360.0);
        assert_eq!(globe.longitudes.len(), 9);
        assert_eq!(globe.longitudes[0].rotate, 0.0);
        assert!(close(globe.longitudes[1].rotate, 20.0));
        assert!(close(globe.longitudes[8].rotate, 160.0));
        assert!(globe.longitudes.iter().all(|e| close(e.ry, 172.0 * 0.38)));
    }

    #[test]
    fn pole_caps_sit_on_the_longitude_tips() {
        let globe = GlobeGeometry::new(200.0);
        let (north, south) = globe.poles;
        assert!(close(north, 100.0 - 92.0 * 0.38));
        assert!(close(south, 100.0 + 92.0 * 0.38));
    }

    #[test]
    fn tiny_globe_keeps_a_visible_ring_height() {
        let globe = GlobeGeometry::new(16.0);
        assert!(globe.latitudes.iter().all(|e| e.ry >= 2.0 && e.rx >= 0.0));
    }

    #[test]
    fn reversed_orbits_spin_backwards() {
        assert!(ORBITS[1].style().contains("animation-direction: reverse"));
        assert!(ORBITS[0].style().starts_with("animation-duration: 28s"));
    }
}

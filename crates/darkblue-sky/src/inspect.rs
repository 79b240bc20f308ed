use crate::target::SkyTarget;

/// Human-readable listing of a sky target and the current value of every
/// parameter it exposes.
pub fn describe_sky<T: SkyTarget>(target: &T) -> String {
    let mut out = format!("Sky found: {}", target.name());

    let groups = [
        ("atmosphere", target.atmosphere().is_some()),
        ("clouds", target.clouds().is_some()),
    ];
    let available = groups.iter().filter(|(_, present)| *present).count();
    out.push_str(&format!("\n\n{available} parameter groups found:"));
    for (name, present) in groups {
        if present {
            out.push_str(&format!("\n> {name}"));
        } else {
            out.push_str(&format!("\n> {name} (unavailable)"));
        }
    }

    if let Some(a) = target.atmosphere() {
        out.push_str("\n\nAtmosphere parameters:");
        out.push_str(&format!("\n> f32 directionality = {}", a.directionality));
        out.push_str(&format!("\n> f32 brightness = {}", a.brightness));
        out.push_str(&format!("\n> f32 fogginess = {}", a.fogginess));
    }

    if let Some(c) = target.clouds() {
        out.push_str("\n\nCloud parameters:");
        out.push_str(&format!("\n> f32 opacity = {}", c.opacity));
        out.push_str(&format!("\n> f32 coverage = {}", c.coverage));
        out.push_str(&format!("\n> f32 sharpness = {}", c.sharpness));
        out.push_str(&format!("\n> f32 brightness = {}", c.brightness));
    }

    out
}

//! 배관 재질별 절대 거칠기 표.
//! 값은 설계 참고용 대표값이다.

#[derive(Debug)]
pub struct PipeMaterial {
    pub name: &'static str,
    /// 절대 거칠기 [m]
    pub roughness_m: f64,
}

const MATERIALS: &[PipeMaterial] = &[
    PipeMaterial {
        name: "Carbon Steel",
        roughness_m: 0.000_045,
    },
    PipeMaterial {
        name: "Stainless Steel",
        roughness_m: 0.000_015,
    },
    PipeMaterial {
        name: "PVC",
        roughness_m: 0.000_001_5,
    },
    PipeMaterial {
        name: "Copper",
        roughness_m: 0.000_001_5,
    },
    PipeMaterial {
        name: "Concrete",
        roughness_m: 0.000_3,
    },
    PipeMaterial {
        name: "Cast Iron",
        roughness_m: 0.000_26,
    },
];

pub fn materials() -> &'static [PipeMaterial] {
    MATERIALS
}

/// 이름(대소문자, 공백/밑줄/하이픈 무시)으로 재질을 찾는다.
pub fn find_material(name: &str) -> Option<&'static PipeMaterial> {
    let wanted = normalize(name);
    MATERIALS.iter().find(|m| normalize(m.name) == wanted)
}

pub fn roughness_m(name: &str) -> Option<f64> {
    find_material(name).map(|m| m.roughness_m)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

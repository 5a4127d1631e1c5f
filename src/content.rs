//! Page Content Catalog
//!
//! Fixed educational content: the preparation-item catalog, the three safety
//! steps, situational guidance, and common-mistake categories. All of it is
//! defined once at startup and never changes at runtime.

use crate::models::{ItemCategory, PreparationItem};

/// Preparation catalog as (id, name, category, description)
const ITEM_CATALOG: &[(&str, &str, ItemCategory, &str)] = &[
    ("water", "飲用水", ItemCategory::Basic, "每人每日 3 公升，至少準備 3 天份"),
    ("food", "乾糧食品", ItemCategory::Basic, "罐頭、餅乾等免烹調即食品"),
    ("flashlight", "手電筒", ItemCategory::Basic, "附備用電池，每個房間放一支"),
    ("radio", "收音機", ItemCategory::Basic, "電池式或手搖式，接收災情廣播"),
    ("whistle", "哨子", ItemCategory::Basic, "受困時向搜救人員求救"),
    ("first-aid", "急救包", ItemCategory::Medical, "紗布、繃帶、優碘、剪刀"),
    ("medicine", "常備藥品", ItemCategory::Medical, "慢性病處方藥至少 7 天份"),
    ("mask", "口罩", ItemCategory::Medical, "阻隔倒塌揚起的粉塵"),
    ("id-copy", "證件影本", ItemCategory::Documents, "身分證、健保卡、存摺影本"),
    ("cash", "備用現金", ItemCategory::Documents, "停電時無法刷卡提款"),
    ("contact-card", "聯絡卡", ItemCategory::Documents, "寫下家人集合點與聯絡電話"),
    ("clothes", "禦寒衣物", ItemCategory::Personal, "輕便外套、雨衣、保暖毯"),
    ("glasses", "備用眼鏡", ItemCategory::Personal, "近視者務必多備一副"),
    ("baby-supplies", "嬰幼兒/長者用品", ItemCategory::Personal, "奶粉、尿布、假牙清潔用品"),
];

/// Build the startup catalog with every item unchecked
pub fn default_items() -> Vec<PreparationItem> {
    ITEM_CATALOG
        .iter()
        .map(|(id, name, category, description)| PreparationItem {
            id: (*id).to_string(),
            name: (*name).to_string(),
            category: *category,
            checked: false,
            description: (*description).to_string(),
        })
        .collect()
}

/// One of the three core safety steps
pub struct SafetyStep {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub points: &'static [&'static str],
}

pub const SAFETY_STEPS: &[SafetyStep] = &[
    SafetyStep {
        title: "趴下",
        subtitle: "Drop",
        points: &[
            "立刻蹲低，雙手雙膝著地",
            "降低重心，避免被搖晃甩倒",
        ],
    },
    SafetyStep {
        title: "掩護",
        subtitle: "Cover",
        points: &[
            "躲進堅固桌子底下",
            "用手臂保護頭部與頸部",
            "遠離窗戶與高大櫃子",
        ],
    },
    SafetyStep {
        title: "穩住",
        subtitle: "Hold On",
        points: &[
            "緊握桌腳，桌子移動時跟著移動",
            "維持姿勢直到搖晃完全停止",
        ],
    },
];

/// Fixed walkthrough shown by the practice button, advanced on a timer
pub const PRACTICE_STEPS: &[&str] = &[
    "地震來了！保持冷靜",
    "第一步：趴下 — 蹲低、雙手著地",
    "第二步：掩護 — 躲進桌下，保護頭頸",
    "第三步：穩住 — 緊握桌腳直到停止搖晃",
    "練習完成！記得與家人一起演練",
];

/// A place-specific guidance entry
pub struct Situation {
    pub place: &'static str,
    pub actions: &'static [&'static str],
}

/// Tab of situations sharing a location category
pub struct SituationCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub entries: &'static [Situation],
}

pub const SITUATION_CATEGORIES: &[SituationCategory] = &[
    SituationCategory {
        id: "indoor",
        label: "室內",
        entries: &[
            Situation {
                place: "臥室",
                actions: &["待在床上用枕頭護頭", "不要急著衝出房間", "穿鞋再下床，地上可能有碎玻璃"],
            },
            Situation {
                place: "廚房",
                actions: &["立刻關火再就地掩護", "遠離冰箱與吊櫃", "小心掉落的刀具與熱鍋"],
            },
            Situation {
                place: "浴室",
                actions: &["用臉盆或毛巾護頭", "蹲低靠牆等待搖晃結束"],
            },
        ],
    },
    SituationCategory {
        id: "outdoor",
        label: "戶外",
        entries: &[
            Situation {
                place: "街道上",
                actions: &["遠離建築物、招牌與電線", "移動到開闊處蹲下", "留意掉落的玻璃帷幕"],
            },
            Situation {
                place: "海邊或山區",
                actions: &["海邊立刻往高處移動，防範海嘯", "山區遠離坡地，防範落石與山崩"],
            },
        ],
    },
    SituationCategory {
        id: "transit",
        label: "交通工具",
        entries: &[
            Situation {
                place: "開車中",
                actions: &["緩慢靠邊停車，不要停在橋上或隧道內", "留在車內直到搖晃停止", "下車時鑰匙留在車上"],
            },
            Situation {
                place: "捷運/公車",
                actions: &["抓緊扶手或拉環", "聽從站務與駕駛指示", "不要急著擠向車門"],
            },
        ],
    },
];

/// One wrong-versus-right teaching pair
pub struct Mistake {
    pub wrong: &'static str,
    pub right: &'static str,
}

/// Tab of mistakes sharing a phase category
pub struct MistakeCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub entries: &'static [Mistake],
}

pub const MISTAKE_CATEGORIES: &[MistakeCategory] = &[
    MistakeCategory {
        id: "during",
        label: "地震當下",
        entries: &[
            Mistake {
                wrong: "搖晃時急著跑出門或搭電梯逃生",
                right: "就地趴下掩護，搖晃停止後再走樓梯離開",
            },
            Mistake {
                wrong: "躲在所謂的「黃金三角」牆角",
                right: "躲進堅固桌下並握住桌腳才是國際建議做法",
            },
            Mistake {
                wrong: "站在窗邊觀察外面狀況",
                right: "玻璃破裂傷人，應遠離窗戶與外牆",
            },
        ],
    },
    MistakeCategory {
        id: "after",
        label: "地震過後",
        entries: &[
            Mistake {
                wrong: "立刻開瓦斯煮飯或點火照明",
                right: "先確認無瓦斯洩漏，改用手電筒照明",
            },
            Mistake {
                wrong: "湧入災區圍觀或立即返家搬運物品",
                right: "留在安全處，等待建物安全檢查結果",
            },
            Mistake {
                wrong: "不斷撥打電話詢問親友",
                right: "改用簡訊或留言平台，把線路留給救災",
            },
        ],
    },
    MistakeCategory {
        id: "prepare",
        label: "平時準備",
        entries: &[
            Mistake {
                wrong: "防災包塞滿卻從不檢查",
                right: "每半年檢查效期，汰換食物、飲水與電池",
            },
            Mistake {
                wrong: "家具靠牆擺放就不固定",
                right: "高櫃、書架、熱水器都要上固定器",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let items = default_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_catalog_starts_unchecked() {
        assert!(default_items().iter().all(|i| !i.checked));
    }

    #[test]
    fn test_every_category_has_items() {
        let items = default_items();
        for category in ItemCategory::ALL {
            assert!(items.iter().any(|i| i.category == category));
        }
    }
}

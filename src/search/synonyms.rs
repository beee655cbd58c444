//! Synonym dictionary for query expansion

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::SynonymEntry;

/// Built-in synonym groups for wiring-manual vocabulary: canonical term, then alternates
pub const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    // Pedals and modules
    (
        "油门踏板",
        &["踏板位置传感器", "Accelerator Pedal Sensor", "APS", "加速踏板", "油门传感器"],
    ),
    (
        "挂车控制模块",
        &["Trailer Control Module", "TCM", "拖车控制器", "挂车控制器", "拖车模块"],
    ),
    (
        "ECU",
        &["Electronic Control Unit", "电子控制单元", "发动机控制单元", "控制模块"],
    ),
    // Wiring hardware
    ("针脚", &["引脚", "Pin", "Terminal", "端子", "接线端"]),
    (
        "连接器",
        &["插接件", "Connector", "接插件", "插头", "插座", "接口"],
    ),
    ("熔断器", &["保险丝", "Fuse", "保险", "熔丝", "电气保护器"]),
    ("继电器", &["Relay", "中继器", "电磁继电器", "开关继电器"]),
    (
        "线束",
        &["Wiring Harness", "电线束", "导线束", "线缆", "电缆束", "Harness"],
    ),
    // Drivetrain and systems
    (
        "自动变速器",
        &["AT", "Automatic Transmission", "自动挡", "自动变速箱", "TCU"],
    ),
    (
        "ADAS",
        &["Advanced Driver Assistance Systems", "自适应巡航", "先进驾驶辅助系统", "驾驶辅助"],
    ),
    ("发动机", &["Engine", "引擎", "动力单元", "Motor", "马达"]),
    ("传感器", &["Sensor", "感应器", "探测器", "检测器"]),
    (
        "电路图",
        &["Circuit Diagram", "线路图", "电气原理图", "Wiring Diagram", "接线图", "电路原理图"],
    ),
    // Emissions, fuel and engine makers
    ("国六", &["国六排放", "China VI", "国VI", "排放标准", "CN6"]),
    ("天然气", &["Natural Gas", "NG", "CNG", "压缩天然气", "气体燃料"]),
    ("玉柴", &["YC", "Yuchai", "YUCHAI", "玉柴发动机"]),
    ("锡柴", &["FAW", "Xichai", "一汽锡柴", "CA"]),
    // Table headings
    (
        "管脚",
        &["针脚", "引脚", "Pin", "Terminal", "端子", "接线端", "脚位"],
    ),
    ("序号", &["编号", "No.", "Number", "序列号", "标号"]),
    ("信号", &["Signal", "电信号", "信号线", "数据线"]),
    ("功能", &["Function", "作用", "用途", "用处"]),
    ("型号", &["Model", "规格", "牌号", "Type", "款型"]),
    (
        "位置",
        &["Position", "安装位置", "布置位置", "Location", "位点"],
    ),
];

/// Default synonym table as owned entries
pub fn default_synonym_entries() -> Vec<SynonymEntry> {
    DEFAULT_SYNONYMS
        .iter()
        .map(|&(term, synonyms)| {
            SynonymEntry::new(term, synonyms.iter().map(|s| s.to_string()).collect())
        })
        .collect()
}

/// Case-insensitive lookup from any term or synonym to its whole group.
///
/// Built once; never mutated afterwards. When two entries share a member,
/// the later entry wins for that key.
#[derive(Debug, Default, Clone)]
pub struct SynonymIndex {
    /// lowercased member → group (original spelling, term first)
    groups: HashMap<String, Arc<[String]>>,
}

impl SynonymIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from synonym entries
    pub fn from_entries(entries: &[SynonymEntry]) -> Self {
        let mut groups = HashMap::new();

        for entry in entries {
            let group: Arc<[String]> = entry.group().into();
            for member in group.iter() {
                groups.insert(member.to_lowercase(), Arc::clone(&group));
            }
        }

        Self { groups }
    }

    /// Build the index from the built-in table
    pub fn with_defaults() -> Self {
        Self::from_entries(&default_synonym_entries())
    }

    /// Get the group containing `term`, matched case-insensitively
    pub fn lookup(&self, term: &str) -> Option<&[String]> {
        self.groups.get(&term.to_lowercase()).map(|group| &**group)
    }

    /// Check if a term belongs to any group
    pub fn has_synonyms(&self, term: &str) -> bool {
        self.groups.contains_key(&term.to_lowercase())
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if index is empty
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

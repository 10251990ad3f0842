use phf::phf_map;

/// 站点支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 韩语
    Ko,
    /// 英语
    En,
    /// 日语
    Ja,
    /// 中文
    Zh,
    /// 西班牙语
    Es,
    /// 德语
    De,
    /// 法语
    Fr,
    /// 葡萄牙语
    Pt,
    /// 俄语
    Ru,
    /// 印尼语
    Id,
    /// 越南语
    Vi,
    /// 土耳其语
    Tr,
}

static TITLES: phf::Map<&'static str, &'static str> = phf_map! {
    "ko" => "정신연령 테스트",
    "en" => "Mental Age Test",
    "ja" => "精神年齢テスト",
    "zh" => "心理年龄测试",
    "es" => "Test de Edad Mental",
    "de" => "Mentalalter-Test",
    "fr" => "Test d'Âge Mental",
    "pt" => "Teste de Idade Mental",
    "ru" => "Тест на Возраст",
    "id" => "Tes Usia Mental",
    "vi" => "Bài Kiểm Tra Tuổi",
    "tr" => "Zihinsel Yaş Testi",
};

static SUBTITLES: phf::Map<&'static str, &'static str> = phf_map! {
    "ko" => "당신의 정신연령은?",
    "en" => "What is Your Mental Age?",
    "ja" => "あなたの精神年齢は?",
    "zh" => "你的心理年龄是多少?",
    "es" => "¿Cuál es tu edad mental?",
    "de" => "Wie alt bist du im Kopf?",
    "fr" => "Quel est votre âge mental?",
    "pt" => "Qual é a sua idade mental?",
    "ru" => "Какой твой возраст?",
    "id" => "Berapa Usia Mentalmu?",
    "vi" => "Tuổi Tâm Lý Của Bạn?",
    "tr" => "Zihinsel Yaşınız Kaç?",
};

impl Locale {
    /// 全部语言（按站点顺序）
    pub const ALL: [Locale; 12] = [
        Locale::Ko,
        Locale::En,
        Locale::Ja,
        Locale::Zh,
        Locale::Es,
        Locale::De,
        Locale::Fr,
        Locale::Pt,
        Locale::Ru,
        Locale::Id,
        Locale::Vi,
        Locale::Tr,
    ];

    /// 获取语言代码
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
            Locale::Es => "es",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Pt => "pt",
            Locale::Ru => "ru",
            Locale::Id => "id",
            Locale::Vi => "vi",
            Locale::Tr => "tr",
        }
    }

    /// 从语言代码解析（忽略大小写和地区后缀，如 `ko-KR`）
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }

    /// 解析语言代码，不支持的代码回退到英语
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Locale::En)
    }

    /// 站点标题
    pub fn title(self) -> &'static str {
        TITLES.get(self.code()).copied().unwrap_or("Mental Age Test")
    }

    /// 站点副标题
    pub fn subtitle(self) -> &'static str {
        SUBTITLES
            .get(self.code())
            .copied()
            .unwrap_or("What is Your Mental Age?")
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

use std::str::FromStr;

/// Language of the messages shown in place of offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    pub fn no_offers(self) -> &'static str {
        match self {
            Locale::En => "No active offers found.",
            Locale::PtBr => "Nenhuma oferta ativa encontrada.",
        }
    }

    pub fn load_failed(self) -> &'static str {
        match self {
            Locale::En => "We could not load the offers right now. Please reload the page.",
            Locale::PtBr => "Ocorreu um erro ao carregar as ofertas. Recarregue a página.",
        }
    }

    pub fn search_placeholder(self) -> &'static str {
        match self {
            Locale::En => "Search by city or building",
            Locale::PtBr => "Buscar por cidade ou prédio",
        }
    }

    pub fn view_deal(self) -> &'static str {
        match self {
            Locale::En => "View Deal",
            Locale::PtBr => "Ver oferta",
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}

use camara_api::query::{build_url, Endpoint, OptionKind, Options, SortOrder};
use camara_api::resources::{bills, events, fronts, legislators, votes};
use camara_api::Error;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://dadosabertos.camara.leg.br/api/v2").unwrap()
}

fn request_url(endpoint: &Endpoint, id: Option<&str>, options: &Options) -> Result<Url, Error> {
    let url = endpoint.url(&base_url(), id)?;
    build_url(&url, Some(options), &endpoint.options)
}

#[test]
fn bills_list_with_many_filters() {
    let options = Options::new()
        .with("siglaTipo", vec!["PL", "PEC"])
        .with("ano", [2019, 2020])
        .with("siglaUfAutor", vec!["SP"])
        .with("keywords", vec!["previdência"])
        .with("tramitacaoSenado", false)
        .with("dataApresentacaoInicio", NaiveDate::from_ymd_opt(2019, 1, 1).unwrap())
        .with_order(SortOrder::Desc)
        .with_sort_by("ano");
    let url = request_url(&bills::LIST, None, &options).unwrap();
    insta::assert_snapshot!(url.as_str(), @"https://dadosabertos.camara.leg.br/api/v2/proposicoes?itens=100&siglaTipo=PL&siglaTipo=PEC&ano=2019&ano=2020&siglaUfAutor=SP&keywords=previd%C3%AAncia&tramitacaoSenado=false&dataApresentacaoInicio=2019-01-01&ordem=desc&ordenarPor=ano");
}

#[test]
fn events_list_with_times() {
    let start = Utc.with_ymd_and_hms(2023, 5, 24, 14, 30, 0).unwrap();
    let options = Options::new()
        .with("dataInicio", start)
        .with("horaInicio", start)
        .with("horaFim", NaiveTime::from_hms_opt(18, 5, 0).unwrap())
        .with("idOrgao", [180]);
    let url = request_url(&events::LIST, None, &options).unwrap();
    insta::assert_snapshot!(url.as_str(), @"https://dadosabertos.camara.leg.br/api/v2/eventos?itens=100&dataInicio=2023-05-24&horaInicio=14%3A30&horaFim=18%3A05&idOrgao=180");
}

#[test]
fn legislator_expenses_url() {
    let options = Options::new().with("ano", [2023]).with("mes", vec![1, 2, 3]);
    let url = request_url(&legislators::EXPENSES, Some("204554"), &options).unwrap();
    assert_eq!(url.path(), "/api/v2/deputados/204554/despesas");
    assert_eq!(url.query(), Some("itens=100&ano=2023&mes=1&mes=2&mes=3"));
}

#[test]
fn vote_ids_are_string_lists() {
    assert_eq!(votes::LIST.options.kind_of("id"), Some(OptionKind::StringList));
    let options = Options::new().with("id", vec!["2265603-43", "2265603-44"]);
    let url = request_url(&votes::LIST, None, &options).unwrap();
    assert_eq!(url.query(), Some("itens=100&id=2265603-43&id=2265603-44"));
}

#[test]
fn fronts_list_has_no_page_size() {
    let options = Options::new().with_legislatures(&[56, 57]);
    let url = request_url(&fronts::LIST, None, &options).unwrap();
    assert_eq!(url.query(), Some("idLegislatura=56&idLegislatura=57"));
}

#[test]
fn sub_resource_options_are_checked_per_operation() {
    // `siglaUf` is accepted by the listing, not by the expenses of one legislator.
    let options = Options::new().with("siglaUf", vec!["SP"]);
    assert!(request_url(&legislators::LIST, None, &options).is_ok());
    assert!(matches!(
        request_url(&legislators::EXPENSES, Some("1"), &options),
        Err(Error::UnknownOption { .. })
    ));
    assert!(matches!(
        request_url(&legislators::FRONTS, Some("1"), &options),
        Err(Error::UnknownOption { .. })
    ));
}

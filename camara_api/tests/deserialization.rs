use camara_api::types::{
    AgendaItem, Ballot, BillDetail, Bloc, BoardMember, Expense, FrontDetail, Legislator,
    LegislatorDetail, Page, PartyDetail, RelatedBill, Relation, VoteDetail,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_legislators_page() {
    let json = load_fixture("legislators.json");
    let page: Page<Vec<Legislator>> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.links.len(), 3);
    assert_eq!(page.links[0].rel, Relation::Current);
    assert!(page.links.iter().all(|l| l.rel != Relation::Next));

    let first = &page.data[0];
    assert_eq!(first.id, 204554);
    assert_eq!(first.sigla_partido.as_deref(), Some("PL"));
    assert_eq!(first.sigla_uf.as_deref(), Some("MT"));
    assert_eq!(first.id_legislatura, Some(57));

    let second = &page.data[1];
    assert_eq!(second.sigla_partido, None);
    assert_eq!(second.email, None);
}

#[test]
fn deserialize_legislator_detail() {
    let json = load_fixture("legislator_detail.json");
    let page: Page<LegislatorDetail> = serde_json::from_str(&json).unwrap();
    let detail = page.data;
    assert_eq!(detail.nome_civil, "Abílio Jacques Brunini Moumer");
    assert_eq!(detail.rede_social.len(), 1);
    assert_eq!(detail.data_falecimento, None);

    let status = &detail.ultimo_status;
    assert_eq!(status.legislator.id, 204554);
    assert_eq!(status.legislator.nome, "Abilio Brunini");
    assert_eq!(status.condicao_eleitoral.as_deref(), Some("Titular"));
    let office = status.gabinete.as_ref().unwrap();
    assert_eq!(office.sala.as_deref(), Some("466"));
    assert_eq!(office.telefone.as_deref(), Some("3215-5466"));
}

#[test]
fn deserialize_expenses() {
    let json = load_fixture("expenses.json");
    let page: Page<Vec<Expense>> = serde_json::from_str(&json).unwrap();
    let expense = &page.data[0];
    assert_eq!(expense.ano, 2023);
    assert_eq!(expense.mes, 3);
    assert_eq!(expense.valor_documento, 250.5);
    assert_eq!(expense.valor_glosa, 0.0);
    assert_eq!(expense.cnpj_cpf_fornecedor.as_deref(), Some("03621022000130"));
}

#[test]
fn bloc_ids_arrive_as_strings_or_numbers() {
    let json = load_fixture("blocs.json");
    let page: Page<Vec<Bloc>> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.data[0].id, 585);
    assert_eq!(page.data[1].id, 586);
    assert!(page.data.iter().all(|b| b.id_legislatura == Some(57)));
}

#[test]
fn deserialize_party_detail() {
    let json = load_fixture("party_detail.json");
    let page: Page<PartyDetail> = serde_json::from_str(&json).unwrap();
    let party = page.data;
    assert_eq!(party.party.sigla, "PL");
    assert_eq!(party.numero_eleitoral, Some(22));

    let status = party.status.unwrap();
    assert_eq!(status.total_posse, Some(99));
    assert_eq!(status.total_membros, Some(95));
    assert_eq!(status.id_legislatura, Some(57));
    assert_eq!(status.lider.unwrap().uf.as_deref(), Some("RJ"));
}

#[test]
fn deserialize_bill_detail() {
    let json = load_fixture("bill_detail.json");
    let page: Page<BillDetail> = serde_json::from_str(&json).unwrap();
    let bill = page.data;
    assert_eq!(bill.bill.sigla_tipo, "PEC");
    assert_eq!(bill.bill.numero, 6);
    assert_eq!(bill.bill.ano, 2019);

    let status = bill.status_proposicao.unwrap();
    assert_eq!(status.sigla_orgao.as_deref(), Some("PLEN"));
    assert_eq!(status.cod_situacao, Some(1140));
    assert_eq!(status.url, None);
}

#[test]
fn related_bills_have_normalized_numbers() {
    let json = load_fixture("related_bills.json");
    let page: Page<Vec<RelatedBill>> = serde_json::from_str(&json).unwrap();
    assert!(page.links.is_empty());

    let first = &page.data[0];
    assert_eq!(first.cod_tipo, Some(390));
    assert_eq!(first.numero, Some(1));
    assert_eq!(first.ano, Some(2019));

    let second = &page.data[1];
    assert_eq!(second.cod_tipo, Some(162));
    assert_eq!(second.numero, None);
    assert_eq!(second.ano, None);
}

#[test]
fn agenda_items_carry_their_bill_and_rapporteur() {
    let json = load_fixture("event_agenda.json");
    let page: Page<Vec<AgendaItem>> = serde_json::from_str(&json).unwrap();
    let item = &page.data[0];
    assert_eq!(item.ordem, 1);
    assert_eq!(item.proposicao.as_ref().unwrap().numero, 2630);
    assert_eq!(item.relator.as_ref().unwrap().nome, "Orlando Silva");
    assert_eq!(item.proposicao_relacionada, None);
}

#[test]
fn deserialize_vote_detail() {
    let json = load_fixture("vote_detail.json");
    let page: Page<VoteDetail> = serde_json::from_str(&json).unwrap();
    let vote = page.data;
    assert_eq!(vote.vote.id, "2265603-43");
    assert_eq!(vote.vote.aprovacao, Some(1));
    assert_eq!(vote.id_orgao, Some(180));
    assert_eq!(vote.efeitos_registrados.len(), 1);
    assert_eq!(
        vote.efeitos_registrados[0].titulo_proposicao.as_deref(),
        Some("PLP 93/2023")
    );
}

#[test]
fn deserialize_ballots() {
    let json = load_fixture("ballots.json");
    let page: Page<Vec<Ballot>> = serde_json::from_str(&json).unwrap();
    let tallies: Vec<(&str, &str)> = page
        .data
        .iter()
        .map(|b| (b.deputado.nome.as_str(), b.tipo_voto.as_str()))
        .collect();
    assert_eq!(tallies, vec![("Abilio Brunini", "Sim"), ("Adriana Ventura", "Não")]);
}

#[test]
fn front_coordinator_may_be_entirely_null() {
    let json = load_fixture("front_detail.json");
    let page: Page<FrontDetail> = serde_json::from_str(&json).unwrap();
    let front = page.data;
    assert_eq!(front.front.id, 54009);
    assert_eq!(front.situacao.as_deref(), Some("Ativa"));
    assert_eq!(front.coordenador, Some(Default::default()));
}

#[test]
fn deserialize_board_members() {
    let json = load_fixture("legislature_board.json");
    let page: Page<Vec<BoardMember>> = serde_json::from_str(&json).unwrap();
    let president = &page.data[0];
    assert_eq!(president.legislator.nome, "Arthur Lira");
    assert_eq!(president.titulo.as_deref(), Some("Presidente"));
    assert_eq!(president.data_fim, None);
}

#[test]
fn envelope_accepts_data_alias() {
    let json = r#"{ "data": [], "links": [{ "rel": "self", "href": null }] }"#;
    let page: Page<Vec<Legislator>> = serde_json::from_str(json).unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.links[0].href, None);
}

#[test]
fn missing_required_fields_fail() {
    let json = r#"{ "dados": [{ "id": 1 }], "links": [] }"#;
    assert!(serde_json::from_str::<Page<Vec<Legislator>>>(json).is_err());
}

use std::net::Ipv4Addr;

const HEADER_LEN: usize = 12;

/// End offset of the first question in a query message.
pub fn question_end(query: &[u8]) -> usize {
    let mut i = HEADER_LEN;
    while i < query.len() && query[i] != 0 {
        i += query[i] as usize + 1;
    }
    // root label + QTYPE + QCLASS
    (i + 5).min(query.len())
}

fn header(query: &[u8], truncated: bool, rcode: u8, ancount: u16) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);

    let mut flags = 0x80 | (query[2] & 0x01);
    if truncated {
        flags |= 0x02;
    }
    response.push(flags);
    response.push(0x80 | (rcode & 0x0f));

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&ancount.to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&query[HEADER_LEN..question_end(query)]);
    response
}

/// Response echoing the query's ID and question with one A answer.
pub fn a_response(query: &[u8], ip: Ipv4Addr, truncated: bool) -> Vec<u8> {
    let mut response = header(query, truncated, 0, 1);
    response.extend_from_slice(&[
        0xc0, 0x0c, // pointer to the question name
        0x00, 0x01, // A
        0x00, 0x01, // IN
        0x00, 0x00, 0x00, 0x3c, // TTL 60
        0x00, 0x04,
    ]);
    response.extend_from_slice(&ip.octets());
    response
}

/// Answerless response carrying `rcode`.
pub fn rcode_response(query: &[u8], rcode: u8) -> Vec<u8> {
    header(query, false, rcode, 0)
}

pub fn rd_flag(message: &[u8]) -> bool {
    message[2] & 0x01 == 0x01
}

pub fn arcount(message: &[u8]) -> u16 {
    u16::from_be_bytes([message[10], message[11]])
}

/// True when the message ends with an OPT pseudo-record.
pub fn has_opt(message: &[u8]) -> bool {
    message.len() >= 11 && message[message.len() - 10..message.len() - 8] == [0x00, 0x29]
}

pub fn opt_payload(message: &[u8]) -> u16 {
    let at = message.len() - 8;
    u16::from_be_bytes([message[at], message[at + 1]])
}
